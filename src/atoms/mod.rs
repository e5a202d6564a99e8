/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic data and structure model
//!
//! This module provides the species table, point-charge atoms and the
//! parsed structure they belong to.

pub mod atom;
pub mod database;
pub mod errors;
pub mod species;
pub mod structure;
pub mod vector;

pub use atom::{Atom, ChargeSource};
pub use errors::{AtomError, Result};
pub use species::{Element, SpeciesTable, SENTINEL_SYMBOL};
pub use structure::{CoordinateMode, SpeciesBlock, Structure};
pub use vector::Vector3D;
