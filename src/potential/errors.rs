/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for potential evaluation

use thiserror::Error;

/// Result type for potential calculations
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PotentialError {
    /// Positions are fractions of the lattice vectors
    #[error(
        "Structure uses Direct (fractional) coordinates; convert the positions to Cartesian before computing the potential"
    )]
    FractionalCoordinates,

    /// Two atoms sit on the same point
    #[error("Atoms {first} and {second} occupy the same position (zero distance)")]
    DegenerateGeometry { first: usize, second: usize },

    /// Requested reference atom does not exist
    #[error("Reference atom index {index} out of range for a structure of {atom_count} atoms")]
    ReferenceOutOfRange { index: usize, atom_count: usize },
}
