/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Species table: chemical symbol to element data
//!
//! The built-in table is constructed once per process and shared read-only.
//! Callers that need synthetic species (tests, exotic pseudopotential labels)
//! build their own table with [`SpeciesTable::empty`] and [`SpeciesTable::insert`]
//! and hand it to the parser.

use super::database::{self, DEUTERIUM_WEIGHT};
use super::errors::{AtomError, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Symbol used for a placeholder species with no physical element
pub const SENTINEL_SYMBOL: &str = "XX";

static BUILTIN: Lazy<SpeciesTable> = Lazy::new(SpeciesTable::build_builtin);

/// Immutable element record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    /// Chemical symbol as written in structure files
    pub symbol: String,
    /// Atomic number (0 for the sentinel species)
    pub atomic_number: u32,
    /// Representative formal ionic charge
    pub formal_charge: Option<i32>,
    /// Atomic mass in amu
    pub atomic_mass: Option<f64>,
}

impl Element {
    pub fn new(
        symbol: &str,
        atomic_number: u32,
        formal_charge: Option<i32>,
        atomic_mass: Option<f64>,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            atomic_number,
            formal_charge,
            atomic_mass,
        }
    }

    /// Formal charge, or an error naming the symbol when the table has none
    pub fn require_formal_charge(&self) -> Result<i32> {
        self.formal_charge
            .ok_or_else(|| AtomError::MissingFormalCharge(self.symbol.clone()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Z={})", self.symbol, self.atomic_number)
    }
}

/// Mapping from chemical symbol to [`Element`]
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    elements: HashMap<String, Element>,
}

impl SpeciesTable {
    /// The process-wide built-in table
    pub fn builtin() -> &'static SpeciesTable {
        &BUILTIN
    }

    /// A table with no species
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a species; symbols must be unique
    pub fn insert(&mut self, element: Element) -> Result<()> {
        if self.elements.contains_key(&element.symbol) {
            return Err(AtomError::DuplicateSpecies(element.symbol));
        }
        self.elements.insert(element.symbol.clone(), element);
        Ok(())
    }

    /// Builder-style [`SpeciesTable::insert`]
    pub fn with(mut self, element: Element) -> Result<Self> {
        self.insert(element)?;
        Ok(self)
    }

    /// Look up a species by its exact (case-sensitive) symbol
    pub fn lookup(&self, symbol: &str) -> Result<&Element> {
        self.elements
            .get(symbol)
            .ok_or_else(|| AtomError::UnknownSpecies(symbol.to_string()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn build_builtin() -> Self {
        let mut elements = HashMap::with_capacity(database::ELEMENTS.len() + 2);

        for &(symbol, z, charge, weight) in database::ELEMENTS.iter() {
            elements.insert(
                symbol.to_string(),
                Element::new(symbol, z, Some(charge), Some(weight)),
            );
        }

        // Deuterium shares hydrogen's number and charge
        elements.insert(
            "D".to_string(),
            Element::new("D", 1, database::formal_charge(1), Some(DEUTERIUM_WEIGHT)),
        );
        elements.insert(
            SENTINEL_SYMBOL.to_string(),
            Element::new(SENTINEL_SYMBOL, 0, Some(0), None),
        );

        Self { elements }
    }
}
