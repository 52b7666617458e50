//! Input actions and the canonical finesse alphabet.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Column delta for a single step in this direction.
    pub fn delta(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum RotationDir {
    Cw,
    Ccw,
}

/// A classified movement action. `TapMove` is provisional when emitted: it is
/// retracted during normalization if the same press turns into a hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ActionKind {
    TapMove(Direction),
    HoldStart(Direction),
    HoldMove(Direction),
    RepeatMove(Direction),
    Rotate(RotationDir),
    SoftDrop,
    HardDrop,
}

/// A timestamped action as recorded in a piece's input log.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    /// Milliseconds, host clock. Non-decreasing within one log.
    pub time: u64,
}

impl Action {
    pub fn new(kind: ActionKind, time: u64) -> Self {
        Self { kind, time }
    }
}

/// Canonical label alphabet the optimality comparison operates over.
/// A whole hold-run collapses to one `DasLeft`/`DasRight` token.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum FinesseToken {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    DasLeft,
    DasRight,
    HardDrop,
}

impl FinesseToken {
    pub fn step(dir: Direction) -> Self {
        match dir {
            Direction::Left => Self::MoveLeft,
            Direction::Right => Self::MoveRight,
        }
    }

    pub fn das(dir: Direction) -> Self {
        match dir {
            Direction::Left => Self::DasLeft,
            Direction::Right => Self::DasRight,
        }
    }

    pub fn rotate(dir: RotationDir) -> Self {
        match dir {
            RotationDir::Cw => Self::RotateCw,
            RotationDir::Ccw => Self::RotateCcw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_token_constructors() {
        assert_eq!(FinesseToken::step(Direction::Left), FinesseToken::MoveLeft);
        assert_eq!(FinesseToken::das(Direction::Right), FinesseToken::DasRight);
        assert_eq!(FinesseToken::rotate(RotationDir::Ccw), FinesseToken::RotateCcw);
    }

    #[test]
    fn test_action_new() {
        let a = Action::new(ActionKind::HardDrop, 1234);
        assert_eq!(a.kind, ActionKind::HardDrop);
        assert_eq!(a.time, 1234);
    }
}
