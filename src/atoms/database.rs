/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Built-in element data
//!
//! One row per element for Z = 1..=96: symbol, atomic number, a representative
//! formal ionic charge, and the atomic weight in atomic mass units (IUPAC 2013
//! relative atomic masses, integer approximations for elements without stable
//! isotopes). The deuterium alias and the `XX` sentinel are appended by
//! [`super::SpeciesTable::builtin`].

/// (symbol, atomic number, formal charge, atomic weight)
pub(crate) type ElementRow = (&'static str, u32, i32, f64);

pub(crate) const ELEMENTS: [ElementRow; 96] = [
    ("H", 1, 1, 1.008),
    ("He", 2, 0, 4.0026),
    ("Li", 3, 1, 6.94),
    ("Be", 4, 2, 9.0122),
    ("B", 5, 3, 10.81),
    ("C", 6, 4, 12.011),
    ("N", 7, -3, 14.007),
    ("O", 8, -2, 15.999),
    ("F", 9, -1, 18.998),
    ("Ne", 10, 0, 20.180),
    ("Na", 11, 1, 22.990),
    ("Mg", 12, 2, 24.305),
    ("Al", 13, 3, 26.982),
    ("Si", 14, 4, 28.085),
    ("P", 15, 5, 30.974),
    ("S", 16, -2, 32.06),
    ("Cl", 17, -1, 35.45),
    ("Ar", 18, 0, 39.95),
    ("K", 19, 1, 39.098),
    ("Ca", 20, 2, 40.078),
    ("Sc", 21, 3, 44.956),
    ("Ti", 22, 4, 47.867),
    ("V", 23, 5, 50.942),
    ("Cr", 24, 3, 51.996),
    ("Mn", 25, 2, 54.938),
    ("Fe", 26, 3, 55.845),
    ("Co", 27, 2, 58.933),
    ("Ni", 28, 2, 58.693),
    ("Cu", 29, 2, 63.546),
    ("Zn", 30, 2, 65.38),
    ("Ga", 31, 3, 69.723),
    ("Ge", 32, 4, 72.630),
    ("As", 33, 3, 74.922),
    ("Se", 34, -2, 78.971),
    ("Br", 35, -1, 79.904),
    ("Kr", 36, 0, 83.798),
    ("Rb", 37, 1, 85.468),
    ("Sr", 38, 2, 87.62),
    ("Y", 39, 3, 88.906),
    ("Zr", 40, 4, 91.224),
    ("Nb", 41, 5, 92.906),
    ("Mo", 42, 6, 95.95),
    ("Tc", 43, 7, 98.0),
    ("Ru", 44, 4, 101.07),
    ("Rh", 45, 3, 102.91),
    ("Pd", 46, 2, 106.42),
    ("Ag", 47, 1, 107.87),
    ("Cd", 48, 2, 112.41),
    ("In", 49, 3, 114.82),
    ("Sn", 50, 4, 118.71),
    ("Sb", 51, 3, 121.76),
    ("Te", 52, -2, 127.60),
    ("I", 53, -1, 126.90),
    ("Xe", 54, 0, 131.29),
    ("Cs", 55, 1, 132.91),
    ("Ba", 56, 2, 137.33),
    ("La", 57, 3, 138.91),
    ("Ce", 58, 3, 140.12),
    ("Pr", 59, 3, 140.91),
    ("Nd", 60, 3, 144.24),
    ("Pm", 61, 3, 145.0),
    ("Sm", 62, 3, 150.36),
    ("Eu", 63, 3, 151.96),
    ("Gd", 64, 3, 157.25),
    ("Tb", 65, 3, 158.93),
    ("Dy", 66, 3, 162.50),
    ("Ho", 67, 3, 164.93),
    ("Er", 68, 3, 167.26),
    ("Tm", 69, 3, 168.93),
    ("Yb", 70, 3, 173.05),
    ("Lu", 71, 3, 174.97),
    ("Hf", 72, 4, 178.49),
    ("Ta", 73, 5, 180.95),
    ("W", 74, 6, 183.84),
    ("Re", 75, 7, 186.21),
    ("Os", 76, 4, 190.23),
    ("Ir", 77, 4, 192.22),
    ("Pt", 78, 2, 195.08),
    ("Au", 79, 3, 196.97),
    ("Hg", 80, 2, 200.59),
    ("Tl", 81, 1, 204.38),
    ("Pb", 82, 2, 207.2),
    ("Bi", 83, 3, 208.98),
    ("Po", 84, 4, 209.0),
    ("At", 85, -1, 210.0),
    ("Rn", 86, 0, 222.0),
    ("Fr", 87, 1, 223.0),
    ("Ra", 88, 2, 226.0),
    ("Ac", 89, 3, 227.0),
    ("Th", 90, 4, 232.04),
    ("Pa", 91, 5, 231.04),
    ("U", 92, 6, 238.03),
    ("Np", 93, 5, 237.0),
    ("Pu", 94, 4, 244.0),
    ("Am", 95, 3, 243.0),
    ("Cm", 96, 3, 247.0),
];

/// Deuterium standard atomic weight
pub(crate) const DEUTERIUM_WEIGHT: f64 = 2.014;

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: u32) -> Option<&'static str> {
    row(atomic_number).map(|(symbol, ..)| symbol)
}

/// Returns the representative formal ionic charge
pub fn formal_charge(atomic_number: u32) -> Option<i32> {
    row(atomic_number).map(|(_, _, charge, _)| charge)
}

fn row(atomic_number: u32) -> Option<ElementRow> {
    match atomic_number {
        1..=96 => Some(ELEMENTS[atomic_number as usize - 1]),
        _ => None,
    }
}
