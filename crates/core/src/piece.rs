//! Piece shapes, rotation states, and mino definitions.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Rotation state. `North` is the spawn orientation; one rotate action only
/// reaches an adjacent state in the North-East-South-West cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Minimum number of single rotate actions between two states (0..=2).
    pub fn steps_to(self, other: Rotation) -> u8 {
        let diff = (4 + other as i8 - self as i8) % 4;
        match diff {
            0 => 0,
            2 => 2,
            _ => 1,
        }
    }
}

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::S,
        Piece::Z,
        Piece::J,
        Piece::L,
    ];

    /// Mino offsets for this piece at the given rotation.
    /// Returns 4 (col, row) offsets relative to the bounding-box top-left,
    /// with rows growing downward. Standard SRS true-rotation data.
    pub fn minos(self, rot: Rotation) -> [(i8, i8); 4] {
        let idx = match rot {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        };
        match self {
            Piece::I => [
                [(0, 1), (1, 1), (2, 1), (3, 1)],
                [(2, 0), (2, 1), (2, 2), (2, 3)],
                [(0, 2), (1, 2), (2, 2), (3, 2)],
                [(1, 0), (1, 1), (1, 2), (1, 3)],
            ][idx],
            Piece::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            Piece::T => [
                [(1, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (1, 1), (2, 1), (1, 2)],
                [(0, 1), (1, 1), (2, 1), (1, 2)],
                [(1, 0), (0, 1), (1, 1), (1, 2)],
            ][idx],
            Piece::S => [
                [(1, 0), (2, 0), (0, 1), (1, 1)],
                [(1, 0), (1, 1), (2, 1), (2, 2)],
                [(1, 1), (2, 1), (0, 2), (1, 2)],
                [(0, 0), (0, 1), (1, 1), (1, 2)],
            ][idx],
            Piece::Z => [
                [(0, 0), (1, 0), (1, 1), (2, 1)],
                [(2, 0), (1, 1), (2, 1), (1, 2)],
                [(0, 1), (1, 1), (1, 2), (2, 2)],
                [(1, 0), (0, 1), (1, 1), (0, 2)],
            ][idx],
            Piece::J => [
                [(0, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (2, 0), (1, 1), (1, 2)],
                [(0, 1), (1, 1), (2, 1), (2, 2)],
                [(1, 0), (1, 1), (0, 2), (1, 2)],
            ][idx],
            Piece::L => [
                [(2, 0), (0, 1), (1, 1), (2, 1)],
                [(1, 0), (1, 1), (1, 2), (2, 2)],
                [(0, 1), (1, 1), (2, 1), (0, 2)],
                [(0, 0), (1, 0), (1, 1), (1, 2)],
            ][idx],
        }
    }

    /// Spawn column (bounding-box left edge).
    pub fn spawn_col(self) -> i8 {
        match self {
            Piece::O => 4,
            _ => 3,
        }
    }

    /// Spawn row (bounding-box top edge). Rows above the board are negative.
    pub fn spawn_row(self) -> i8 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_north_minos() {
        let m = Piece::T.minos(Rotation::North);
        assert!(m.contains(&(1, 0))); // nub on top
        assert!(m.contains(&(0, 1)));
        assert!(m.contains(&(1, 1)));
        assert!(m.contains(&(2, 1)));
    }

    #[test]
    fn test_rotation_cw() {
        assert_eq!(Rotation::North.cw(), Rotation::East);
        assert_eq!(Rotation::East.cw(), Rotation::South);
        assert_eq!(Rotation::South.cw(), Rotation::West);
        assert_eq!(Rotation::West.cw(), Rotation::North);
    }

    #[test]
    fn test_rotation_ccw() {
        assert_eq!(Rotation::North.ccw(), Rotation::West);
        assert_eq!(Rotation::West.ccw(), Rotation::South);
    }

    #[test]
    fn test_rotation_steps() {
        assert_eq!(Rotation::North.steps_to(Rotation::North), 0);
        assert_eq!(Rotation::North.steps_to(Rotation::East), 1);
        assert_eq!(Rotation::North.steps_to(Rotation::West), 1);
        assert_eq!(Rotation::North.steps_to(Rotation::South), 2);
        assert_eq!(Rotation::East.steps_to(Rotation::West), 2);
    }

    #[test]
    fn test_all_pieces() {
        assert_eq!(Piece::ALL.len(), 7);
    }

    #[test]
    fn test_every_rotation_has_four_minos() {
        for piece in Piece::ALL {
            for rot in Rotation::ALL {
                let minos = piece.minos(rot);
                for (dc, dr) in minos {
                    assert!((0..4).contains(&dc), "{piece:?} {rot:?} col {dc}");
                    assert!((0..4).contains(&dr), "{piece:?} {rot:?} row {dr}");
                }
            }
        }
    }
}
