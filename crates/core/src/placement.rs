//! Placement records - where a piece ended up (or should end up).

use crate::{Piece, Rotation};
use serde::{Deserialize, Serialize};

/// A (piece, column, rotation) triple. The row is derived by dropping and is
/// irrelevant to finesse, so it is not part of the record.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: Piece,
    /// Bounding-box left edge; may be negative near the left wall.
    pub col: i8,
    pub rotation: Rotation,
}

impl Placement {
    pub fn new(piece: Piece, col: i8, rotation: Rotation) -> Self {
        Self {
            piece,
            col,
            rotation,
        }
    }

    /// The piece's spawn placement.
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            col: piece.spawn_col(),
            rotation: Rotation::North,
        }
    }
}
