/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Length unit conversions

use super::constants;

/// Convert from Bohr radii to Angstroms
pub fn bohr_to_angstrom(bohr: f64) -> f64 {
    bohr * constants::BOHR_RADIUS
}

/// Convert from Angstroms to metres
pub fn angstrom_to_meter(angstrom: f64) -> f64 {
    angstrom * constants::ANGSTROM_IN_METERS
}

/// Convert from Bohr radii to metres
pub fn bohr_to_meter(bohr: f64) -> f64 {
    angstrom_to_meter(bohr_to_angstrom(bohr))
}
