/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for structure file parsing

use crate::atoms::AtomError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or parsing a structure document
///
/// Line numbers are 1-based document lines.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Input file {} does not exist", path.display())]
    MissingInputFile { path: PathBuf },

    #[error("Malformed species header at line {line}: {message}")]
    MalformedHeader { line: usize, message: String },

    #[error("No coordinate mode marker (Direct or Cartesian) found")]
    MissingCoordinateMode,

    #[error("Malformed coordinate line {line}: {message}")]
    MalformedCoordinateLine { line: usize, message: String },

    #[error(transparent)]
    Species(#[from] AtomError),
}

impl InputError {
    pub(crate) fn header(line: usize, message: impl Into<String>) -> Self {
        InputError::MalformedHeader {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn coordinate_line(line: usize, message: impl Into<String>) -> Self {
        InputError::MalformedCoordinateLine {
            line,
            message: message.into(),
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
