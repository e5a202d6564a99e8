/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown species '{0}': not present in the species table")]
    UnknownSpecies(String),

    #[error("Species '{0}' has no formal charge in the species table")]
    MissingFormalCharge(String),

    #[error("Duplicate species '{0}' in the species table")]
    DuplicateSpecies(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
