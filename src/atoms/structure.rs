/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Parsed crystal structure: species header plus an ordered atom list

use super::atom::Atom;
use serde::Serialize;
use std::fmt;

/// How positions in the coordinate block are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateMode {
    /// Absolute positions in the document's length unit
    Cartesian,
    /// Fractions of the lattice vectors
    Direct,
}

impl fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateMode::Cartesian => f.write_str("Cartesian"),
            CoordinateMode::Direct => f.write_str("Direct"),
        }
    }
}

/// One entry of the species header: a symbol and how many atoms follow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesBlock {
    pub symbol: String,
    pub count: usize,
}

impl SpeciesBlock {
    pub fn new(symbol: &str, count: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            count,
        }
    }
}

/// A structure read from one document
///
/// Atoms are stored in document order; species block `i` owns a contiguous
/// index range, so `atoms.len()` always equals the sum of the block counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    title: String,
    scale_factor: Option<f64>,
    species: Vec<SpeciesBlock>,
    atoms: Vec<Atom>,
    coordinate_mode: CoordinateMode,
    selective_dynamics: bool,
}

impl Structure {
    pub fn new(
        title: &str,
        scale_factor: Option<f64>,
        species: Vec<SpeciesBlock>,
        atoms: Vec<Atom>,
        coordinate_mode: CoordinateMode,
        selective_dynamics: bool,
    ) -> Self {
        Self {
            title: title.to_string(),
            scale_factor,
            species,
            atoms,
            coordinate_mode,
            selective_dynamics,
        }
    }

    /// Comment line of the document
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Scale factor, when it was read and applied
    pub fn scale_factor(&self) -> Option<f64> {
        self.scale_factor
    }

    pub fn species(&self) -> &[SpeciesBlock] {
        &self.species
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Sum of the species header counts
    pub fn declared_atom_count(&self) -> usize {
        self.species.iter().map(|block| block.count).sum()
    }

    pub fn coordinate_mode(&self) -> CoordinateMode {
        self.coordinate_mode
    }

    pub fn selective_dynamics(&self) -> bool {
        self.selective_dynamics
    }

    /// Charges in atom order
    pub fn charges(&self) -> Vec<f64> {
        self.atoms.iter().map(Atom::charge).collect()
    }

    /// Net charge of the point set
    pub fn total_charge(&self) -> f64 {
        self.atoms.iter().map(Atom::charge).sum()
    }
}
