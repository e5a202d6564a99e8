/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants used in the electrostatic sum

/// Elementary charge in C
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Vacuum permittivity term 4πϵ₀ in C²/(J m)
pub const FOUR_PI_EPSILON_0: f64 = 1.11265e-10;

/// Prefactor e / (4πϵ₀) applied to the accumulated Σ q/r
pub const COULOMB_SCALE: f64 = ELEMENTARY_CHARGE / FOUR_PI_EPSILON_0;

/// Bohr radius in Angstroms
pub const BOHR_RADIUS: f64 = 0.529177;

/// One Angstrom in metres
pub const ANGSTROM_IN_METERS: f64 = 1.0e-10;
