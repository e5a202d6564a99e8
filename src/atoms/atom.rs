/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Point-charge atom representation

use super::vector::Vector3D;
use serde::Serialize;
use std::fmt;

/// Where an atom's charge came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeSource {
    /// Formal charge from the species table
    FormalCharge,
    /// Atomic number used as the charge
    AtomicNumber,
    /// Explicit charge column in the coordinate block
    Explicit,
}

impl fmt::Display for ChargeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChargeSource::FormalCharge => "formal charge",
            ChargeSource::AtomicNumber => "atomic number",
            ChargeSource::Explicit => "explicit column",
        };
        f.write_str(name)
    }
}

/// A point charge at a Cartesian position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Atom {
    /// Position in document order, 0-based
    index: usize,
    /// Species symbol as written in the document header
    symbol: String,
    /// Atomic number resolved from the species table
    atomic_number: u32,
    /// Position in the document's length unit
    position: Vector3D,
    /// Resolved charge
    charge: f64,
    charge_source: ChargeSource,
}

impl Atom {
    /// Create a new atom
    pub fn new(
        index: usize,
        symbol: &str,
        atomic_number: u32,
        position: Vector3D,
        charge: f64,
        charge_source: ChargeSource,
    ) -> Self {
        Self {
            index,
            symbol: symbol.to_string(),
            atomic_number,
            position,
            charge,
            charge_source,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn charge_source(&self) -> ChargeSource {
        self.charge_source
    }

    /// Calculate the distance to another atom
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} (Z={}) at {} q={:+}",
            self.index, self.symbol, self.atomic_number, self.position, self.charge
        )
    }
}
