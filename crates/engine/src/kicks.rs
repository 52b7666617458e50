//! SRS wall-kick tables for adjacent rotation transitions.
//!
//! Offsets are authored in the guideline convention: positive dy is *up*.
//! The resolver negates dy when applying them to the row-down board.
//! Only adjacent transitions have tables; North<->South and East<->West
//! return the empty slice, which is what makes a direct 180 rotation
//! illegal in one action.

use finesse_core::{Piece, Rotation};

/// Get kick offsets for a rotation transition.
/// Returns a slice of (dx, dy) offsets to try in order, after the in-place
/// candidate. Empty for the O piece and for non-adjacent transitions.
pub fn get_kicks(piece: Piece, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    let key = rotation_key(from, to);

    match piece {
        Piece::I => i_kicks(key),
        Piece::O => &[], // O piece doesn't kick
        _ => jlstz_kicks(key),
    }
}

fn rotation_key(from: Rotation, to: Rotation) -> u8 {
    let f = rotation_index(from);
    let t = rotation_index(to);
    f * 10 + t
}

fn rotation_index(r: Rotation) -> u8 {
    match r {
        Rotation::North => 0,
        Rotation::East => 1,
        Rotation::South => 2,
        Rotation::West => 3,
    }
}

/// J/L/S/T/Z kick table (guideline SRS, adjacent transitions only)
fn jlstz_kicks(key: u8) -> &'static [(i8, i8)] {
    match key {
        // CW rotations
        01 => &[(-1, 0), (-1, 1), (0, -2), (-1, -2)], // N -> E
        12 => &[(1, 0), (1, -1), (0, 2), (1, 2)],     // E -> S
        23 => &[(1, 0), (1, 1), (0, -2), (1, -2)],    // S -> W
        30 => &[(-1, 0), (-1, -1), (0, 2), (-1, 2)],  // W -> N

        // CCW rotations
        10 => &[(1, 0), (1, -1), (0, 2), (1, 2)],     // E -> N
        21 => &[(-1, 0), (-1, 1), (0, -2), (-1, -2)], // S -> E
        32 => &[(-1, 0), (-1, -1), (0, 2), (-1, 2)],  // W -> S
        03 => &[(1, 0), (1, 1), (0, -2), (1, -2)],    // N -> W

        // no 180 tables - those transitions always fail
        _ => &[],
    }
}

/// I piece kick table (guideline SRS, adjacent transitions only)
fn i_kicks(key: u8) -> &'static [(i8, i8)] {
    match key {
        // CW rotations
        01 => &[(-2, 0), (1, 0), (-2, -1), (1, 2)], // N -> E
        12 => &[(-1, 0), (2, 0), (-1, 2), (2, -1)], // E -> S
        23 => &[(2, 0), (-1, 0), (2, 1), (-1, -2)], // S -> W
        30 => &[(1, 0), (-2, 0), (1, -2), (-2, 1)], // W -> N

        // CCW rotations
        10 => &[(2, 0), (-1, 0), (2, 1), (-1, -2)], // E -> N
        21 => &[(1, 0), (-2, 0), (1, -2), (-2, 1)], // S -> E
        32 => &[(-2, 0), (1, 0), (-2, -1), (1, 2)], // W -> S
        03 => &[(-1, 0), (2, 0), (-1, 2), (2, -1)], // N -> W

        _ => &[],
    }
}
