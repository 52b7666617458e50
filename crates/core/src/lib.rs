//! Finesse core crate - fundamental types for finesse analysis.

mod action;
mod board;
mod piece;
mod placement;

pub use action::{Action, ActionKind, Direction, FinesseToken, RotationDir};
pub use board::Board;
pub use piece::{Piece, Rotation};
pub use placement::Placement;
