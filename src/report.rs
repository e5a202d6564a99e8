/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Human-readable and JSON reports over an evaluated structure

use crate::atoms::{ChargeSource, CoordinateMode, Structure};
use crate::potential::PotentialResult;
use serde::{Deserialize, Serialize};
use std::fmt;

const RULE_WIDTH: usize = 80;

/// Number formatting for potential values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// Digits after the decimal point
    pub precision: usize,
    /// Scientific notation instead of fixed decimals
    pub scientific: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: 3,
            scientific: false,
        }
    }
}

impl ReportOptions {
    pub fn format_value(&self, value: f64) -> String {
        if self.scientific {
            format!("{:.*e}", self.precision, value)
        } else {
            format!("{:.*}", self.precision, value)
        }
    }
}

/// One species header entry with its resolved atomic number
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesResolution {
    pub symbol: String,
    pub atomic_number: u32,
    pub count: usize,
}

/// Potential at one site, tagged with the species sitting there
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitePotential {
    pub reference_index: usize,
    pub symbol: String,
    pub value: f64,
    pub raw_sum: f64,
}

/// Everything printed for one structure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub source: String,
    pub title: String,
    pub atom_count: usize,
    pub species: Vec<SpeciesResolution>,
    pub charges: Vec<f64>,
    pub charge_sources: Vec<ChargeSource>,
    pub total_charge: f64,
    pub coordinate_mode: CoordinateMode,
    pub potentials: Vec<SitePotential>,
}

impl Report {
    pub fn new(source: &str, structure: &Structure, potentials: &[PotentialResult]) -> Self {
        let atoms = structure.atoms();

        let mut offset = 0;
        let species = structure
            .species()
            .iter()
            .map(|block| {
                let atomic_number = atoms.get(offset).map(|atom| atom.atomic_number()).unwrap_or(0);
                offset += block.count;
                SpeciesResolution {
                    symbol: block.symbol.clone(),
                    atomic_number,
                    count: block.count,
                }
            })
            .collect();

        let mut charge_sources = Vec::new();
        for atom in atoms {
            if !charge_sources.contains(&atom.charge_source()) {
                charge_sources.push(atom.charge_source());
            }
        }

        let potentials = potentials
            .iter()
            .map(|result| SitePotential {
                reference_index: result.reference_index,
                symbol: structure
                    .atom(result.reference_index)
                    .map(|atom| atom.symbol().to_string())
                    .unwrap_or_default(),
                value: result.value,
                raw_sum: result.raw_sum,
            })
            .collect();

        Self {
            source: source.to_string(),
            title: structure.title().to_string(),
            atom_count: structure.atom_count(),
            species,
            charges: structure.charges(),
            charge_sources,
            total_charge: structure.total_charge(),
            coordinate_mode: structure.coordinate_mode(),
            potentials,
        }
    }

    /// Plain-text listing
    pub fn render_text(&self, options: &ReportOptions) -> String {
        let mut out = String::new();
        // fmt::Write for String never returns an error
        self.write_text(&mut out, options)
            .map(|()| out)
            .unwrap_or_default()
    }

    /// Write the plain-text listing into any formatter sink
    pub fn write_text(&self, out: &mut impl fmt::Write, options: &ReportOptions) -> fmt::Result {
        writeln!(out, "Structure: {} ({})", self.title, self.source)?;
        writeln!(out, "Atom Numbers:")?;
        for species in &self.species {
            writeln!(
                out,
                "{} --> {}  (x{})",
                species.symbol, species.atomic_number, species.count
            )?;
        }
        writeln!(out, "Atoms: {}", self.atom_count)?;
        let charges: Vec<String> = self.charges.iter().map(|q| q.to_string()).collect();
        writeln!(out, "Charges: [{}]", charges.join(", "))?;
        let sources: Vec<String> = self.charge_sources.iter().map(|s| s.to_string()).collect();
        writeln!(out, "Charge source: {}", sources.join(", "))?;
        writeln!(out, "Total charge: {}", self.total_charge)?;
        writeln!(out, "Coordinate mode: {}", self.coordinate_mode)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for site in &self.potentials {
            writeln!(
                out,
                "Madelung potential at atom {} ({}): {}",
                site.reference_index,
                site.symbol,
                options.format_value(site.value)
            )?;
        }
        Ok(())
    }

    /// Values only, one per line
    pub fn render_values(&self, options: &ReportOptions) -> String {
        self.potentials
            .iter()
            .map(|site| options.format_value(site.value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
