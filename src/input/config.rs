/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for the structure parser

use serde::{Deserialize, Serialize};

/// How atom charges are resolved while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChargePolicy {
    /// Explicit charge column when a line has one, formal charge otherwise
    #[default]
    Auto,
    /// Always the species table's formal charge
    #[value(name = "formal")]
    #[serde(alias = "formal")]
    FormalCharge,
    /// Atomic number as charge (legacy script behaviour)
    AtomicNumber,
}

/// Structure parser configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Charge resolution policy
    pub charge_policy: ChargePolicy,
    /// Multiply Cartesian positions by the scale factor on line 2
    pub apply_scale_factor: bool,
}
