//! finesse-engine - piece movement, rotation resolution, and input timing.
//!
//! Provides adjacent-transition SRS kicks, collision checks, and the DAS/ARR
//! timing classifier.

pub mod collision;
pub mod kicks;
pub mod movement;
pub mod timing;

pub use collision::{can_place, collides, drop_row};
pub use kicks::get_kicks;
pub use movement::{can_rotate, slide_col, try_rotate, try_rotate_to, try_shift, RotationResult};
pub use timing::{DasState, Emitted, InputEvent, InputTimer, TimingConfig, MAX_PULSES_PER_TICK};
