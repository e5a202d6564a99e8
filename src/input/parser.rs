/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Parser for POSCAR/CONTCAR structure documents
//!
//! Layout (0-based lines):
//!
//! ```text
//! 0   comment / title
//! 1   scale factor
//! 2-4 lattice vectors
//! 5   species symbols          Na Cl
//! 6   species counts           4  4
//! 7   [Selective dynamics]
//! 7/8 coordinate mode          Cartesian
//! ..  one line per atom        x y z [T T T] [charge]
//! ```
//!
//! A fourth numeric column on a coordinate line is an explicit charge for that
//! atom. A non-numeric column equal to the atom's own species symbol is
//! accepted as a label and skipped.

use super::config::{ChargePolicy, ParserConfig};
use super::coordinates::{locate_mode_marker, ModeMarker};
use super::errors::{InputError, Result};
use crate::atoms::{
    Atom, ChargeSource, CoordinateMode, Element, SpeciesBlock, SpeciesTable, Structure, Vector3D,
};
use log::{debug, warn};

const SCALE_LINE: usize = 1;
const SYMBOLS_LINE: usize = 5;
const COUNTS_LINE: usize = 6;

/// One coordinate line split into its parts
#[derive(Debug, Clone, Copy, PartialEq)]
struct CoordinateRow {
    position: Vector3D,
    charge: Option<f64>,
}

/// Structure document parser bound to a species table
#[derive(Debug, Clone)]
pub struct PoscarParser<'a> {
    species_table: &'a SpeciesTable,
    config: ParserConfig,
}

impl PoscarParser<'static> {
    /// Parser over the built-in species table
    pub fn with_builtin_table(config: ParserConfig) -> Self {
        Self::new(SpeciesTable::builtin(), config)
    }
}

impl<'a> PoscarParser<'a> {
    pub fn new(species_table: &'a SpeciesTable, config: ParserConfig) -> Self {
        Self {
            species_table,
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole document into a [`Structure`]
    pub fn parse(&self, document: &str) -> Result<Structure> {
        let lines: Vec<&str> = document.lines().collect();

        let species = parse_species_header(&lines)?;
        let elements = species
            .iter()
            .map(|block| self.species_table.lookup(&block.symbol))
            .collect::<std::result::Result<Vec<&Element>, _>>()?;
        for element in &elements {
            debug!("{} --> {}", element.symbol, element.atomic_number);
        }

        let scale_factor = if self.config.apply_scale_factor {
            Some(parse_scale_factor(&lines)?)
        } else {
            None
        };

        let marker = locate_mode_marker(&lines).ok_or(InputError::MissingCoordinateMode)?;
        debug!(
            "Coordinate mode {} at line {}{}",
            marker.mode,
            marker.line + 1,
            if marker.selective_dynamics {
                " (selective dynamics)"
            } else {
                ""
            }
        );

        let total_atoms: usize = species.iter().map(|block| block.count).sum();
        let first_row = marker.line + 1;
        check_block_length(&lines, first_row, total_atoms)?;

        let mut atoms = Vec::with_capacity(total_atoms);
        let mut explicit_count = 0usize;
        let owners = species
            .iter()
            .zip(&elements)
            .flat_map(|(block, element)| std::iter::repeat(*element).take(block.count));

        for (index, element) in owners.enumerate() {
            let line_index = first_row + index;
            let row = parse_coordinate_row(lines[line_index], line_index + 1, &marker, element)?;

            let position = match (scale_factor, marker.mode) {
                (Some(scale), CoordinateMode::Cartesian) => row.position * scale,
                _ => row.position,
            };
            let (charge, source) = self.resolve_charge(element, row.charge)?;
            if source == ChargeSource::Explicit {
                explicit_count += 1;
            }

            atoms.push(Atom::new(
                index,
                &element.symbol,
                element.atomic_number,
                position,
                charge,
                source,
            ));
        }

        if self.config.charge_policy == ChargePolicy::Auto
            && explicit_count > 0
            && explicit_count < total_atoms
        {
            warn!(
                "Only {} of {} atoms carry an explicit charge; the rest use formal charges",
                explicit_count, total_atoms
            );
        }

        Ok(Structure::new(
            lines.first().map(|line| line.trim()).unwrap_or(""),
            scale_factor,
            species,
            atoms,
            marker.mode,
            marker.selective_dynamics,
        ))
    }

    fn resolve_charge(
        &self,
        element: &Element,
        explicit: Option<f64>,
    ) -> Result<(f64, ChargeSource)> {
        match (self.config.charge_policy, explicit) {
            (ChargePolicy::Auto, Some(charge)) => Ok((charge, ChargeSource::Explicit)),
            (ChargePolicy::AtomicNumber, _) => {
                Ok((element.atomic_number as f64, ChargeSource::AtomicNumber))
            }
            (ChargePolicy::Auto, None) | (ChargePolicy::FormalCharge, _) => Ok((
                element.require_formal_charge()? as f64,
                ChargeSource::FormalCharge,
            )),
        }
    }
}

/// Read the species symbol and count lines
pub fn parse_species_header(lines: &[&str]) -> Result<Vec<SpeciesBlock>> {
    let (Some(symbol_line), Some(count_line)) = (lines.get(SYMBOLS_LINE), lines.get(COUNTS_LINE))
    else {
        return Err(InputError::header(
            lines.len() + 1,
            format!(
                "document has {} lines, species symbols and counts are expected on lines {} and {}",
                lines.len(),
                SYMBOLS_LINE + 1,
                COUNTS_LINE + 1
            ),
        ));
    };

    let symbols: Vec<&str> = symbol_line.split_whitespace().collect();
    let counts: Vec<&str> = count_line.split_whitespace().collect();

    if symbols.is_empty() {
        return Err(InputError::header(SYMBOLS_LINE + 1, "no species symbols"));
    }
    if symbols.iter().all(|token| token.parse::<f64>().is_ok()) {
        return Err(InputError::header(
            SYMBOLS_LINE + 1,
            "species symbol line holds numbers; files without a symbol line are not supported",
        ));
    }
    if symbols.len() != counts.len() {
        return Err(InputError::header(
            COUNTS_LINE + 1,
            format!(
                "{} species symbols but {} species counts",
                symbols.len(),
                counts.len()
            ),
        ));
    }

    symbols
        .iter()
        .zip(&counts)
        .map(|(symbol, count)| match count.parse::<usize>() {
            Ok(n) if n > 0 => Ok(SpeciesBlock::new(symbol, n)),
            _ => Err(InputError::header(
                COUNTS_LINE + 1,
                format!("count '{}' for {} is not a positive integer", count, symbol),
            )),
        })
        .collect()
}

fn parse_scale_factor(lines: &[&str]) -> Result<f64> {
    let token = lines
        .get(SCALE_LINE)
        .and_then(|line| line.split_whitespace().next())
        .ok_or_else(|| InputError::header(SCALE_LINE + 1, "missing scale factor"))?;
    let scale: f64 = token.parse().map_err(|_| {
        InputError::header(SCALE_LINE + 1, format!("invalid scale factor '{}'", token))
    })?;

    if scale <= 0.0 || !scale.is_finite() {
        return Err(InputError::header(
            SCALE_LINE + 1,
            format!(
                "scale factor must be positive, got {} (target-volume scaling is not supported)",
                scale
            ),
        ));
    }
    Ok(scale)
}

/// Make sure exactly `total` coordinate lines follow the mode marker
fn check_block_length(lines: &[&str], first_row: usize, total: usize) -> Result<()> {
    let available = lines.len().saturating_sub(first_row);
    if available < total {
        return Err(InputError::coordinate_line(
            lines.len() + 1,
            format!(
                "species counts declare {} atoms but only {} lines follow the coordinate mode line",
                total, available
            ),
        ));
    }

    // CONTCAR files carry further blocks after a blank line, so only a line
    // that reads as another coordinate row is an error here.
    if let Some(extra) = lines.get(first_row + total) {
        if looks_like_coordinate_row(extra) {
            return Err(InputError::coordinate_line(
                first_row + total + 1,
                format!(
                    "more coordinate lines than the {} atoms declared by the species counts",
                    total
                ),
            ));
        }
    }
    Ok(())
}

fn looks_like_coordinate_row(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().take(3).collect();
    tokens.len() == 3 && tokens.iter().all(|token| token.parse::<f64>().is_ok())
}

fn is_flag(token: &str) -> bool {
    matches!(token, "T" | "F" | "t" | "f")
}

/// `f64::from_str` accepts `nan`, `inf` and overflowing literals
fn require_finite(value: f64, token: &str, line_number: usize) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::coordinate_line(
            line_number,
            format!("'{}' is not a finite number", token),
        ))
    }
}

fn parse_coordinate_row(
    line: &str,
    line_number: usize,
    marker: &ModeMarker,
    element: &Element,
) -> Result<CoordinateRow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(InputError::coordinate_line(
            line_number,
            format!("expected at least 3 columns (x y z), found {}", tokens.len()),
        ));
    }

    let mut xyz = [0.0f64; 3];
    for (column, (slot, token)) in xyz.iter_mut().zip(&tokens).enumerate() {
        *slot = match token.parse::<f64>() {
            Ok(value) => require_finite(value, token, line_number)?,
            Err(_) => {
                return Err(InputError::coordinate_line(
                    line_number,
                    format!("non-numeric token '{}' in column {}", token, column + 1),
                ))
            }
        };
    }

    let mut rest = &tokens[3..];
    if marker.selective_dynamics {
        let flags = rest.iter().take(3).take_while(|token| is_flag(token)).count();
        if flags < 3 {
            return Err(InputError::coordinate_line(
                line_number,
                format!("expected 3 selective dynamics flags (T/F), found {}", flags),
            ));
        }
        rest = &rest[flags..];
    }

    let mut charge = None;
    for (offset, token) in rest.iter().enumerate() {
        if *token == element.symbol {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) if charge.is_none() => {
                charge = Some(require_finite(value, token, line_number)?)
            }
            Ok(_) => {
                return Err(InputError::coordinate_line(
                    line_number,
                    format!("unexpected extra numeric column '{}'", token),
                ))
            }
            Err(_) => {
                return Err(InputError::coordinate_line(
                    line_number,
                    format!(
                        "non-numeric token '{}' in column {}",
                        token,
                        tokens.len() - rest.len() + offset + 1
                    ),
                ))
            }
        }
    }

    Ok(CoordinateRow {
        position: Vector3D::new(xyz[0], xyz[1], xyz[2]),
        charge,
    })
}
