/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Direct-sum Madelung potential
//!
//! For a reference atom `i` the potential is
//!
//! ```text
//! V_i = e / (4πϵ₀) · Σ_{j ≠ i} q_j / |r_i − r_j|
//! ```
//!
//! summed over the point set as given, without periodic images. By default
//! only atom 0 is evaluated, which reproduces the output of the legacy script;
//! [`MadelungEvaluator::evaluate_all`] returns one value per atom.

use super::errors::{PotentialError, Result};
use super::validation::require_cartesian;
use crate::atoms::Structure;
use crate::utils::constants::COULOMB_SCALE;
use crate::utils::{angstrom_to_meter, bohr_to_meter};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Length unit of the positions, used to convert distances before summing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Distances are used exactly as written in the document
    #[default]
    Raw,
    /// Positions are in Angstroms; distances are converted to metres
    Angstrom,
    /// Positions are in Bohr radii; distances are converted to metres
    Bohr,
}

impl LengthUnit {
    /// Factor that turns a document distance into the summation unit
    pub fn distance_factor(&self) -> f64 {
        match self {
            LengthUnit::Raw => 1.0,
            LengthUnit::Angstrom => angstrom_to_meter(1.0),
            LengthUnit::Bohr => bohr_to_meter(1.0),
        }
    }
}

/// Evaluator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Atom whose site potential is computed
    pub reference_index: usize,
    /// Compute the potential at every atom instead
    pub all_atoms: bool,
    pub length_unit: LengthUnit,
}

/// Potential at one reference atom
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PotentialResult {
    pub reference_index: usize,
    /// Scaled potential e/(4πϵ₀) · Σ q/r
    pub value: f64,
    /// Unscaled Σ q/r
    pub raw_sum: f64,
}

/// Pairwise Coulomb summation over a parsed structure
#[derive(Debug, Clone, Default)]
pub struct MadelungEvaluator {
    config: EvaluatorConfig,
}

impl MadelungEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate what the configuration asks for: the configured reference
    /// atom, or every atom when `all_atoms` is set
    pub fn run(&self, structure: &Structure) -> Result<Vec<PotentialResult>> {
        if self.config.all_atoms {
            self.evaluate_all(structure)
        } else {
            Ok(vec![self.evaluate(structure, self.config.reference_index)?])
        }
    }

    /// Potential at the atom `reference_index`
    pub fn evaluate(
        &self,
        structure: &Structure,
        reference_index: usize,
    ) -> Result<PotentialResult> {
        require_cartesian(structure)?;
        let result = self.site_potential(structure, reference_index)?;
        debug!(
            "Potential at atom {}: {:e} (sum q/r = {:e})",
            result.reference_index, result.value, result.raw_sum
        );
        Ok(result)
    }

    /// Potential at every atom, in atom order
    pub fn evaluate_all(&self, structure: &Structure) -> Result<Vec<PotentialResult>> {
        require_cartesian(structure)?;
        (0..structure.atom_count())
            .into_par_iter()
            .map(|index| self.site_potential(structure, index))
            .collect()
    }

    fn site_potential(
        &self,
        structure: &Structure,
        reference_index: usize,
    ) -> Result<PotentialResult> {
        let atoms = structure.atoms();
        let reference = atoms
            .get(reference_index)
            .ok_or(PotentialError::ReferenceOutOfRange {
                index: reference_index,
                atom_count: atoms.len(),
            })?;
        let factor = self.config.length_unit.distance_factor();

        let mut raw_sum = 0.0;
        for (j, atom) in atoms.iter().enumerate() {
            if j == reference_index {
                continue;
            }
            let distance = reference.distance_to(atom);
            if distance == 0.0 {
                return Err(PotentialError::DegenerateGeometry {
                    first: reference_index.min(j),
                    second: reference_index.max(j),
                });
            }
            raw_sum += atom.charge() / (distance * factor);
        }

        Ok(PotentialResult {
            reference_index,
            value: raw_sum * COULOMB_SCALE,
            raw_sum,
        })
    }
}

/// Potential at `reference_index` with the default configuration
pub fn madelung_potential(
    structure: &Structure,
    reference_index: usize,
) -> Result<PotentialResult> {
    MadelungEvaluator::default().evaluate(structure, reference_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::atoms::{Atom, ChargeSource, CoordinateMode, SpeciesBlock, Vector3D};

    fn point_set(points: &[([f64; 3], f64)]) -> Structure {
        let atoms = points
            .iter()
            .enumerate()
            .map(|(i, (p, q))| {
                Atom::new(i, "XX", 0, Vector3D::new(p[0], p[1], p[2]), *q, ChargeSource::Explicit)
            })
            .collect();
        Structure::new(
            "",
            None,
            vec![SpeciesBlock::new("XX", points.len())],
            atoms,
            CoordinateMode::Cartesian,
            false,
        )
    }

    #[test]
    fn test_pair_potential() {
        let structure = point_set(&[([0.0, 0.0, 0.0], 1.0), ([2.0, 0.0, 0.0], -1.0)]);
        let result = madelung_potential(&structure, 0).unwrap();

        assert_eq!(result.reference_index, 0);
        assert_relative_eq!(result.raw_sum, -0.5);
        assert_relative_eq!(result.value, -0.5 * COULOMB_SCALE, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_charge_is_excluded() {
        let a = point_set(&[([0.0, 0.0, 0.0], 1.0), ([0.0, 3.0, 4.0], 2.0)]);
        let b = point_set(&[([0.0, 0.0, 0.0], 7.0), ([0.0, 3.0, 4.0], 2.0)]);

        let va = madelung_potential(&a, 0).unwrap().raw_sum;
        let vb = madelung_potential(&b, 0).unwrap().raw_sum;
        assert_relative_eq!(va, 0.4);
        assert_relative_eq!(va, vb);
    }

    #[test]
    fn test_evaluate_all_matches_single() {
        let structure = point_set(&[
            ([0.0, 0.0, 0.0], 1.0),
            ([1.0, 0.0, 0.0], -1.0),
            ([0.0, 2.0, 0.0], 0.5),
        ]);
        let evaluator = MadelungEvaluator::default();
        let all = evaluator.evaluate_all(&structure).unwrap();

        assert_eq!(all.len(), 3);
        for (i, result) in all.iter().enumerate() {
            assert_eq!(result.reference_index, i);
            let single = evaluator.evaluate(&structure, i).unwrap();
            assert_relative_eq!(result.value, single.value);
        }
        // atom 1 sees +1 at 1.0 and +0.5 at sqrt(5)
        assert_relative_eq!(all[1].raw_sum, 1.0 + 0.5 / 5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_run_uses_config() {
        let structure = point_set(&[([0.0, 0.0, 0.0], 1.0), ([2.0, 0.0, 0.0], -1.0)]);

        let single = MadelungEvaluator::new(EvaluatorConfig {
            reference_index: 1,
            ..Default::default()
        })
        .run(&structure)
        .unwrap();
        assert_eq!(single.len(), 1);
        assert_relative_eq!(single[0].raw_sum, 0.5);

        let all = MadelungEvaluator::new(EvaluatorConfig {
            all_atoms: true,
            ..Default::default()
        })
        .run(&structure)
        .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_length_unit() {
        let structure = point_set(&[([0.0, 0.0, 0.0], 1.0), ([2.0, 0.0, 0.0], -1.0)]);
        let evaluator = MadelungEvaluator::new(EvaluatorConfig {
            length_unit: LengthUnit::Angstrom,
            ..Default::default()
        });
        let result = evaluator.evaluate(&structure, 0).unwrap();

        assert_relative_eq!(result.raw_sum, -0.5e10, max_relative = 1e-12);
        // e/(4πϵ₀) / 2 Å is about -7.2 V
        assert_relative_eq!(result.value, -7.2, max_relative = 1e-2);
    }

    #[test]
    fn test_degenerate_geometry() {
        let structure = point_set(&[
            ([0.0, 0.0, 0.0], 1.0),
            ([1.0, 1.0, 1.0], -1.0),
            ([0.0, 0.0, 0.0], 1.0),
        ]);
        assert_eq!(
            madelung_potential(&structure, 0),
            Err(PotentialError::DegenerateGeometry { first: 0, second: 2 })
        );
        assert_eq!(
            MadelungEvaluator::default().evaluate_all(&structure),
            Err(PotentialError::DegenerateGeometry { first: 0, second: 2 })
        );
    }

    #[test]
    fn test_reference_out_of_range() {
        let structure = point_set(&[([0.0, 0.0, 0.0], 1.0)]);
        assert_eq!(
            madelung_potential(&structure, 3),
            Err(PotentialError::ReferenceOutOfRange { index: 3, atom_count: 1 })
        );
    }

    #[test]
    fn test_single_atom_has_zero_potential() {
        let structure = point_set(&[([0.0, 0.0, 0.0], 1.0)]);
        assert_eq!(madelung_potential(&structure, 0).unwrap().value, 0.0);
    }
}
