//! Rotation resolution with kick application, plus horizontal movement.

use crate::collision::can_place;
use crate::kicks::get_kicks;
use finesse_core::{Board, Piece, Rotation, RotationDir};

/// Result of a successful rotation attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationResult {
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
    /// 0 = in place, 1.. = index into the kick table plus one
    pub kick_index: usize,
}

/// Try to rotate a piece one step, applying kicks if necessary.
/// Returns None if the rotation is not possible.
pub fn try_rotate(
    board: &Board,
    piece: Piece,
    rotation: Rotation,
    col: i8,
    row: i8,
    dir: RotationDir,
) -> Option<RotationResult> {
    let to = match dir {
        RotationDir::Cw => rotation.cw(),
        RotationDir::Ccw => rotation.ccw(),
    };
    try_rotate_to(board, piece, rotation, to, col, row)
}

/// Try to rotate to a specific rotation state.
///
/// The in-place candidate is tried first, then each kick offset in table
/// order. Kick tables are authored with positive dy = up, so dy is negated
/// here for the row-down board. A transition with no table (any 180) fails.
pub fn try_rotate_to(
    board: &Board,
    piece: Piece,
    from: Rotation,
    to: Rotation,
    col: i8,
    row: i8,
) -> Option<RotationResult> {
    // O only "rotates" onto its current state
    if piece == Piece::O && from != to {
        return None;
    }

    if can_place(board, piece, to, col, row) {
        return Some(RotationResult {
            rotation: to,
            col,
            row,
            kick_index: 0,
        });
    }

    let kicks = get_kicks(piece, from, to);
    for (i, (dx, dy)) in kicks.iter().enumerate() {
        let nc = col + dx;
        let nr = row - dy; // sign flip: tables are row-up, board is row-down
        if can_place(board, piece, to, nc, nr) {
            return Some(RotationResult {
                rotation: to,
                col: nc,
                row: nr,
                kick_index: i + 1,
            });
        }
    }

    None
}

/// Non-mutating legality check for a rotation transition.
pub fn can_rotate(
    board: &Board,
    piece: Piece,
    from: Rotation,
    to: Rotation,
    col: i8,
    row: i8,
) -> bool {
    try_rotate_to(board, piece, from, to, col, row).is_some()
}

/// Try to shift the piece horizontally by `dc` columns.
pub fn try_shift(
    board: &Board,
    piece: Piece,
    rotation: Rotation,
    col: i8,
    row: i8,
    dc: i8,
) -> Option<i8> {
    let new_col = col + dc;
    if can_place(board, piece, rotation, new_col, row) {
        Some(new_col)
    } else {
        None
    }
}

/// Resting column for a fully-held direction: slides one column at a time
/// until the first obstruction.
pub fn slide_col(
    board: &Board,
    piece: Piece,
    rotation: Rotation,
    col: i8,
    row: i8,
    dc: i8,
) -> i8 {
    let mut at = col;
    while can_place(board, piece, rotation, at + dc, row) {
        at += dc;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rotation() {
        let board = Board::new();
        let result = try_rotate(&board, Piece::T, Rotation::North, 3, 0, RotationDir::Cw);
        assert!(result.is_some());
        let r = result.unwrap();
        assert_eq!(r.rotation, Rotation::East);
        assert_eq!(r.kick_index, 0); // no kick needed mid-board
        assert_eq!((r.col, r.row), (3, 0));
    }

    #[test]
    fn test_wall_kick_shifts_column() {
        let board = Board::new();
        // T East hugging the left wall at col -1; CCW back to North needs a kick
        assert!(can_place(&board, Piece::T, Rotation::East, -1, 0));
        let r = try_rotate(&board, Piece::T, Rotation::East, -1, 0, RotationDir::Ccw)
            .expect("kick should resolve");
        assert_eq!(r.rotation, Rotation::North);
        assert_eq!(r.col, 0);
        assert!(r.kick_index > 0);
    }

    #[test]
    fn test_kick_row_sign_flip() {
        // Cage the T so the only opening for East is one row *down* from the
        // in-place candidate: the accepting kick is (0, -2) row-up, i.e. +2 rows.
        let mut board = Board::new();
        for row in 0..Board::HEIGHT {
            board.fill_row(row, 1);
        }
        for (dc, dr) in Piece::T.minos(Rotation::East) {
            board.set((3 + dc) as usize, (5 + dr) as usize, 0);
        }
        let r = try_rotate_to(&board, Piece::T, Rotation::North, Rotation::East, 3, 3)
            .expect("down-kick should resolve");
        assert_eq!(r.row, 5);
        assert_eq!(r.col, 3);
    }

    #[test]
    fn test_180_rotation_fails() {
        let board = Board::new();
        assert!(try_rotate_to(&board, Piece::T, Rotation::North, Rotation::South, 3, 0).is_none());
        assert!(!can_rotate(&board, Piece::T, Rotation::East, Rotation::West, 3, 0));
    }

    #[test]
    fn test_o_rotation() {
        let board = Board::new();
        // only the identity transition stands
        assert!(can_rotate(&board, Piece::O, Rotation::North, Rotation::North, 4, 0));
        assert!(try_rotate(&board, Piece::O, Rotation::North, 4, 0, RotationDir::Cw).is_none());
        assert!(try_rotate(&board, Piece::O, Rotation::North, 4, 0, RotationDir::Ccw).is_none());
    }

    #[test]
    fn test_shift() {
        let board = Board::new();
        assert_eq!(try_shift(&board, Piece::T, Rotation::North, 3, 0, -1), Some(2));
        // T box at col 0 already touches the left wall
        assert_eq!(try_shift(&board, Piece::T, Rotation::North, 0, 0, -1), None);
    }

    #[test]
    fn test_slide_to_wall() {
        let board = Board::new();
        assert_eq!(slide_col(&board, Piece::T, Rotation::North, 3, 0, -1), 0);
        assert_eq!(slide_col(&board, Piece::T, Rotation::North, 3, 0, 1), 7);
        // I East has its column at box offset 2
        assert_eq!(slide_col(&board, Piece::I, Rotation::East, 3, 0, -1), -2);
    }

    #[test]
    fn test_slide_stops_at_obstruction() {
        let mut board = Board::new();
        board.set(1, 1, 1);
        // T North occupies rows 0..=1; the block at (1, 1) stops it at col 2
        assert_eq!(slide_col(&board, Piece::T, Rotation::North, 5, 0, -1), 2);
    }
}
