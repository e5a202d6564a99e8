/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Coordinate mode detection for POSCAR-style documents
//!
//! The mode line normally sits right after the species count line, or one
//! line further down when a `Selective dynamics` line is present. Only the
//! first character of that line matters (`D`/`d` for Direct, `C`/`c`/`K`/`k`
//! for Cartesian), which is how VASP reads it.
//!
//! Documents that do not put a recognisable marker in that slot are handled by
//! a legacy scan over the remaining lines: the first line whose leading token
//! is `direct` or `d` wins, otherwise the first one whose leading token is
//! `cartesian` or `c`. The scan never looks at the seven header lines, where a
//! species line such as `C` would otherwise read as a marker.

use crate::atoms::CoordinateMode;
use log::debug;

/// 0-based index of the first line that may hold the mode marker
pub const MODE_SLOT: usize = 7;

const DIRECT_TOKENS: [&str; 2] = ["direct", "d"];
const CARTESIAN_TOKENS: [&str; 2] = ["cartesian", "c"];

/// Location and meaning of the coordinate mode marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMarker {
    pub mode: CoordinateMode,
    /// 0-based index of the marker line; coordinates start on the next line
    pub line: usize,
    pub selective_dynamics: bool,
}

/// Locate the coordinate mode marker in a document split into lines
pub fn locate_mode_marker(lines: &[&str]) -> Option<ModeMarker> {
    let selective_dynamics = lines
        .get(MODE_SLOT)
        .map(|line| is_selective_dynamics(line))
        .unwrap_or(false);
    let slot = if selective_dynamics {
        MODE_SLOT + 1
    } else {
        MODE_SLOT
    };

    if let Some(mode) = lines.get(slot).and_then(|line| mode_from_slot(line)) {
        return Some(ModeMarker {
            mode,
            line: slot,
            selective_dynamics,
        });
    }

    debug!("No coordinate mode in header slot, scanning document");
    scan_for_marker(lines).map(|(mode, line)| ModeMarker {
        mode,
        line,
        selective_dynamics,
    })
}

/// VASP only inspects the first character of the mode line
pub fn mode_from_slot(line: &str) -> Option<CoordinateMode> {
    match line.trim_start().chars().next()? {
        'D' | 'd' => Some(CoordinateMode::Direct),
        'C' | 'c' | 'K' | 'k' => Some(CoordinateMode::Cartesian),
        _ => None,
    }
}

fn is_selective_dynamics(line: &str) -> bool {
    matches!(line.trim_start().chars().next(), Some('S' | 's'))
}

fn scan_for_marker(lines: &[&str]) -> Option<(CoordinateMode, usize)> {
    let find = |tokens: &[&str]| {
        lines
            .iter()
            .enumerate()
            .skip(MODE_SLOT)
            .find(|(_, line)| leading_token_matches(line, tokens))
            .map(|(index, _)| index)
    };

    find(&DIRECT_TOKENS)
        .map(|index| (CoordinateMode::Direct, index))
        .or_else(|| find(&CARTESIAN_TOKENS).map(|index| (CoordinateMode::Cartesian, index)))
}

fn leading_token_matches(line: &str, tokens: &[&str]) -> bool {
    line.split_whitespace()
        .next()
        .map(|first| tokens.iter().any(|token| first.eq_ignore_ascii_case(token)))
        .unwrap_or(false)
}
