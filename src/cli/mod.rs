/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Argument definitions, merging of command-line flags over a JSON run
//! configuration, and the batch driver used by the binary.

use crate::config::RunConfig;
use crate::input::{ChargePolicy, DEFAULT_FILE_NAMES};
use crate::potential::LengthUnit;
use crate::report::Report;
use crate::Madelung;
use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use log::error;
use std::path::PathBuf;

/// Madelung potential from POSCAR/CONTCAR files
#[derive(Parser, Debug, Default)]
#[command(
    name = "madelung-rs",
    about = "Direct-sum Madelung potential at a reference atom of a POSCAR/CONTCAR structure",
    version
)]
pub struct Cli {
    /// Structure files (default: POSCAR, then CONTCAR, in the working directory)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// JSON run configuration; flags below override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reference atom index (0-based)
    #[arg(short, long, value_name = "INDEX")]
    pub reference: Option<usize>,

    /// Evaluate the potential at every atom
    #[arg(short, long)]
    pub all: bool,

    /// Charge resolution policy
    #[arg(long, value_enum, value_name = "POLICY")]
    pub charges: Option<ChargePolicy>,

    /// Length unit of the positions
    #[arg(long, value_enum, value_name = "UNIT")]
    pub unit: Option<LengthUnit>,

    /// Multiply Cartesian positions by the scale factor on line 2
    #[arg(long)]
    pub scale: bool,

    /// Decimal places for potential values
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Print potentials in scientific notation
    #[arg(long)]
    pub scientific: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print only the potential values
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,
}

impl Cli {
    /// Configuration file (if any) with command-line overrides applied
    pub fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("loading configuration {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(policy) = self.charges {
            config.parser.charge_policy = policy;
        }
        if self.scale {
            config.parser.apply_scale_factor = true;
        }
        if let Some(index) = self.reference {
            config.evaluator.reference_index = index;
        }
        if self.all {
            config.evaluator.all_atoms = true;
        }
        if let Some(unit) = self.unit {
            config.evaluator.length_unit = unit;
        }
        if let Some(precision) = self.precision {
            config.report.precision = precision;
        }
        if self.scientific {
            config.report.scientific = true;
        }
        Ok(config)
    }

    /// Files named on the command line, or the conventional default
    pub fn input_files(&self) -> Vec<PathBuf> {
        if !self.files.is_empty() {
            return self.files.clone();
        }
        let found = DEFAULT_FILE_NAMES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file());
        vec![found.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAMES[0]))]
    }
}

/// Set up `env_logger`; `RUST_LOG` takes precedence over `-v`
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Evaluate every input file and print its report
///
/// Each structure succeeds or fails on its own; the error at the end names
/// how many failed.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config()?;
    let files = cli.input_files();
    let calculator = Madelung::new(config.clone());

    let mut reports = Vec::new();
    let mut failures = 0usize;
    for (path, result) in calculator.compute_batch(&files) {
        match result {
            Ok(calculation) => reports.push(Report::new(
                &path.display().to_string(),
                &calculation.structure,
                &calculation.potentials,
            )),
            Err(err) => {
                error!("{}: {}", path.display(), err);
                eprintln!("ERROR: {}: {}", path.display(), err);
                failures += 1;
            }
        }
    }

    if cli.json {
        let json = match reports.as_slice() {
            [single] => single.render_json()?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{}", json);
    } else {
        for report in &reports {
            if cli.quiet {
                println!("{}", report.render_values(&config.report));
            } else {
                print!("{}", report.render_text(&config.report));
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} structures failed", failures, files.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flag_parsing() {
        let cli = Cli::try_parse_from([
            "madelung-rs",
            "CONTCAR",
            "--all",
            "--charges",
            "atomic-number",
            "--unit",
            "angstrom",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.files, vec![PathBuf::from("CONTCAR")]);
        assert!(cli.all);
        assert_eq!(cli.charges, Some(ChargePolicy::AtomicNumber));
        assert_eq!(cli.unit, Some(LengthUnit::Angstrom));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_json() {
        assert!(Cli::try_parse_from(["madelung-rs", "--quiet", "--json"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "evaluator": {{ "reference_index": 2 }}, "report": {{ "precision": 5 }} }}"#
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            reference: Some(1),
            charges: Some(ChargePolicy::FormalCharge),
            ..Default::default()
        };
        let config = cli.run_config().unwrap();

        assert_eq!(config.evaluator.reference_index, 1);
        assert_eq!(config.report.precision, 5);
        assert_eq!(config.parser.charge_policy, ChargePolicy::FormalCharge);
    }

    #[test]
    fn test_run_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            files: vec![dir.path().join("POSCAR")],
            quiet: true,
            ..Default::default()
        };
        assert!(run(&cli).is_err());
    }
}
