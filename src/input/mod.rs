/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Structure document input
//!
//! The parser works on text only. [`read_structure_file`] is the one place
//! that touches the filesystem; it turns a missing file into
//! [`InputError::MissingInputFile`] before any parsing happens.

mod config;
mod coordinates;
mod errors;
mod parser;

pub use config::{ChargePolicy, ParserConfig};
pub use coordinates::{locate_mode_marker, mode_from_slot, ModeMarker, MODE_SLOT};
pub use errors::{InputError, Result};
pub use parser::{parse_species_header, PoscarParser};

use crate::atoms::Structure;
use std::fs;
use std::path::Path;

/// Conventional structure file names, in lookup order
pub const DEFAULT_FILE_NAMES: [&str; 2] = ["POSCAR", "CONTCAR"];

/// Read a structure document from disk
pub fn read_structure_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(InputError::MissingInputFile {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parse a document with the built-in species table
pub fn parse_structure(document: &str, config: &ParserConfig) -> Result<Structure> {
    PoscarParser::with_builtin_table(config.clone()).parse(document)
}

/// Read and parse a structure file with the built-in species table
pub fn parse_structure_file<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<Structure> {
    let document = read_structure_file(path)?;
    parse_structure(&document, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("POSCAR");
        match read_structure_file(&path) {
            Err(InputError::MissingInputFile { path: missing }) => assert_eq!(missing, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("CONTCAR");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "Li2O\n1.0\n4 0 0\n0 4 0\n0 0 4\nLi O\n2 1\nCartesian\n1 0 0\n-1 0 0\n0 0 0\n"
        )
        .unwrap();

        let structure = parse_structure_file(&path, &ParserConfig::default()).unwrap();
        assert_eq!(structure.atom_count(), 3);
        assert_eq!(structure.charges(), vec![1.0, 1.0, -2.0]);
    }
}
