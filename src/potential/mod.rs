/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Electrostatic potential evaluation
//!
//! The coordinate mode gate in [`validation`] runs before any distance is
//! computed; the evaluator in [`madelung`] never attempts a partial result.

mod errors;
pub mod madelung;
pub mod validation;

pub use errors::{PotentialError, Result};
pub use madelung::{
    madelung_potential, EvaluatorConfig, LengthUnit, MadelungEvaluator, PotentialResult,
};
pub use validation::require_cartesian;
