/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Run configuration
//!
//! A run is described by parser, evaluator and report settings. They can be
//! stored as JSON; every field is optional and falls back to its default:
//!
//! ```json
//! {
//!   "parser": { "charge_policy": "auto", "apply_scale_factor": false },
//!   "evaluator": { "reference_index": 0, "all_atoms": false, "length_unit": "raw" },
//!   "report": { "precision": 3, "scientific": false }
//! }
//! ```

use crate::input::ParserConfig;
use crate::potential::EvaluatorConfig;
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors while loading a run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Full configuration of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub parser: ParserConfig,
    pub evaluator: EvaluatorConfig,
    pub report: ReportOptions,
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
