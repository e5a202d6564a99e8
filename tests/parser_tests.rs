/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use madelung_rs::atoms::{ChargeSource, CoordinateMode};
use madelung_rs::input::{
    parse_structure, parse_structure_file, ChargePolicy, InputError, ParserConfig,
};
use rstest::rstest;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

const PEROVSKITE: &str = "SrTiO3 cubic cell
1.0
3.905 0.000 0.000
0.000 3.905 0.000
0.000 0.000 3.905
Sr Ti O
1 1 3
Cartesian
0.0000 0.0000 0.0000
1.9525 1.9525 1.9525
1.9525 1.9525 0.0000
1.9525 0.0000 1.9525
0.0000 1.9525 1.9525
";

/// Test helper to write a structure document to a temporary POSCAR
fn create_test_poscar(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("POSCAR");
    let mut file = File::create(&file_path).unwrap();
    write!(file, "{}", content).unwrap();
    (dir, file_path)
}

#[test]
fn test_atom_count_matches_species_counts() {
    let structure = parse_structure(PEROVSKITE, &ParserConfig::default()).unwrap();

    assert_eq!(structure.atom_count(), 5);
    assert_eq!(structure.declared_atom_count(), structure.atom_count());

    let symbols: Vec<&str> = structure.atoms().iter().map(|a| a.symbol()).collect();
    assert_eq!(symbols, vec!["Sr", "Ti", "O", "O", "O"]);
    let indices: Vec<usize> = structure.atoms().iter().map(|a| a.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(structure.charges(), vec![2.0, 4.0, -2.0, -2.0, -2.0]);
    assert_eq!(structure.total_charge(), 0.0);
}

#[test]
fn test_parsing_is_deterministic() {
    let config = ParserConfig::default();
    let first = parse_structure(PEROVSKITE, &config).unwrap();
    let second = parse_structure(PEROVSKITE, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_from_file() {
    let (_dir, file_path) = create_test_poscar(PEROVSKITE);
    let structure = parse_structure_file(&file_path, &ParserConfig::default()).unwrap();
    assert_eq!(structure.title(), "SrTiO3 cubic cell");
    assert_eq!(structure.coordinate_mode(), CoordinateMode::Cartesian);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = parse_structure_file(dir.path().join("CONTCAR"), &ParserConfig::default());
    assert!(matches!(result, Err(InputError::MissingInputFile { .. })));
}

#[test]
fn test_direct_structure_still_parses() {
    let document = PEROVSKITE.replace("Cartesian", "Direct");
    let structure = parse_structure(&document, &ParserConfig::default()).unwrap();
    assert_eq!(structure.coordinate_mode(), CoordinateMode::Direct);
}

#[test]
fn test_charge_annotated_contcar() {
    let document = "charges from a population analysis
1.0
3.905 0 0
0 3.905 0
0 0 3.905
Sr Ti O
1 1 3
Cartesian
0 0 0 1.6
0.5 0.5 0.5 2.2
0.5 0.5 0 -1.27
0.5 0 0.5 -1.27
0 0.5 0.5 -1.26

  0.0 0.0 0.0
";

    let structure = parse_structure(document, &ParserConfig::default()).unwrap();
    assert_eq!(structure.charges(), vec![1.6, 2.2, -1.27, -1.27, -1.26]);
    assert!(structure
        .atoms()
        .iter()
        .all(|atom| atom.charge_source() == ChargeSource::Explicit));
}

#[rstest]
#[case::fewer_counts("Sr Ti O\n1 1\n")]
#[case::zero_count("Sr Ti O\n1 0 3\n")]
#[case::negative_count("Sr Ti O\n1 -1 3\n")]
#[case::fractional_count("Sr Ti O\n1 1.5 3\n")]
fn test_malformed_header(#[case] header: &str) {
    let document = PEROVSKITE.replace("Sr Ti O\n1 1 3\n", header);
    let result = parse_structure(&document, &ParserConfig::default());
    assert!(
        matches!(result, Err(InputError::MalformedHeader { line: 7, .. })),
        "unexpected result {:?}",
        result
    );
}

#[rstest]
#[case::extra_row("1 1 2", 13)]
#[case::missing_row("1 1 4", 14)]
fn test_counts_disagree_with_body(#[case] counts: &str, #[case] line: usize) {
    let document = PEROVSKITE.replace("1 1 3", counts);
    match parse_structure(&document, &ParserConfig::default()) {
        Err(InputError::MalformedCoordinateLine { line: reported, .. }) => {
            assert_eq!(reported, line)
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[rstest]
#[case::two_columns("1.9525 1.9525")]
#[case::text("1.9525 abc 1.9525")]
#[case::stray_token("1.9525 1.9525 1.9525 xyz")]
#[case::two_charges("1.9525 1.9525 1.9525 4.0 1.0")]
#[case::nan_coordinate("nan 1.9525 1.9525")]
#[case::infinite_coordinate("1.9525 inf 1.9525")]
#[case::overflowing_coordinate("1.9525 1.9525 1e999")]
#[case::nan_charge("1.9525 1.9525 1.9525 NaN")]
fn test_malformed_coordinate_line(#[case] row: &str) {
    let document = PEROVSKITE.replace("1.9525 1.9525 1.9525", row);
    assert!(matches!(
        parse_structure(&document, &ParserConfig::default()),
        Err(InputError::MalformedCoordinateLine { line: 10, .. })
    ));
}

#[rstest]
#[case(ChargePolicy::Auto, vec![2.0, 4.0, -2.0, -2.0, -2.0])]
#[case(ChargePolicy::FormalCharge, vec![2.0, 4.0, -2.0, -2.0, -2.0])]
#[case(ChargePolicy::AtomicNumber, vec![38.0, 22.0, 8.0, 8.0, 8.0])]
fn test_charge_policies(#[case] policy: ChargePolicy, #[case] expected: Vec<f64>) {
    let config = ParserConfig {
        charge_policy: policy,
        ..Default::default()
    };
    let structure = parse_structure(PEROVSKITE, &config).unwrap();
    assert_eq!(structure.charges(), expected);
}

#[test]
fn test_mode_marker_anywhere_after_header() {
    // Marker pushed one line down by a stray comment
    let document = PEROVSKITE.replace("Cartesian\n", "# relaxed\ncartesian\n");
    let structure = parse_structure(&document, &ParserConfig::default()).unwrap();
    assert_eq!(structure.coordinate_mode(), CoordinateMode::Cartesian);
    assert_eq!(structure.atom_count(), 5);
}
