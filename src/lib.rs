/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # madelung-rs
//!
//! Electrostatic (Madelung) potential at a reference site of a crystal
//! structure read from a POSCAR/CONTCAR document.
//!
//! The pipeline is a single pass: the document is parsed into an ordered list
//! of point charges ([`input`]), the coordinate mode is checked, and the
//! Coulomb sum is evaluated at one atom or at every atom ([`potential`]). The
//! sum is a direct, non-periodic one.
//!
//! ```no_run
//! use madelung_rs::{Madelung, RunConfig};
//!
//! let calculation = Madelung::new(RunConfig::default()).compute_file("POSCAR")?;
//! println!("{:e}", calculation.potentials[0].value);
//! # Ok::<(), madelung_rs::MadelungError>(())
//! ```

pub mod atoms;
pub mod cli;
pub mod config;
pub mod input;
pub mod potential;
pub mod report;
pub mod utils;

pub use config::{ConfigError, RunConfig};

use crate::atoms::{SpeciesTable, Structure};
use crate::input::{InputError, PoscarParser};
use crate::potential::{MadelungEvaluator, PotentialError, PotentialResult};
use log::info;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Any failure of one structure's calculation
#[derive(Error, Debug)]
pub enum MadelungError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Potential(#[from] PotentialError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Parsed structure together with its evaluated potentials
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub structure: Structure,
    pub potentials: Vec<PotentialResult>,
}

/// Entry point: parse, validate and evaluate structures with one configuration
#[derive(Debug, Clone)]
pub struct Madelung<'a> {
    config: RunConfig,
    species_table: &'a SpeciesTable,
}

impl Madelung<'static> {
    /// Calculator over the built-in species table
    pub fn new(config: RunConfig) -> Self {
        Self::with_species_table(config, SpeciesTable::builtin())
    }
}

impl<'a> Madelung<'a> {
    pub fn with_species_table(config: RunConfig, species_table: &'a SpeciesTable) -> Self {
        Self {
            config,
            species_table,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the whole pipeline on document text
    pub fn compute_str(&self, document: &str) -> Result<Calculation, MadelungError> {
        let structure =
            PoscarParser::new(self.species_table, self.config.parser.clone()).parse(document)?;
        info!(
            "Parsed {} atoms ({} coordinates)",
            structure.atom_count(),
            structure.coordinate_mode()
        );

        let potentials = MadelungEvaluator::new(self.config.evaluator.clone()).run(&structure)?;
        Ok(Calculation {
            structure,
            potentials,
        })
    }

    /// Read a structure file and run the pipeline on it
    pub fn compute_file<P: AsRef<Path>>(&self, path: P) -> Result<Calculation, MadelungError> {
        let document = crate::input::read_structure_file(path)?;
        self.compute_str(&document)
    }

    /// Evaluate several files in parallel; each keeps its own result
    pub fn compute_batch(
        &self,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<Calculation, MadelungError>)> {
        paths
            .par_iter()
            .map(|path| (path.clone(), self.compute_file(path)))
            .collect()
    }
}
