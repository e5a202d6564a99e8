/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Precondition checks run before any distance is computed

use super::errors::{PotentialError, Result};
use crate::atoms::{CoordinateMode, Structure};

/// Fail unless the structure holds absolute (Cartesian) positions
///
/// There is no conversion fallback: a Direct structure aborts the evaluation.
pub fn require_cartesian(structure: &Structure) -> Result<()> {
    match structure.coordinate_mode() {
        CoordinateMode::Cartesian => Ok(()),
        CoordinateMode::Direct => Err(PotentialError::FractionalCoordinates),
    }
}
