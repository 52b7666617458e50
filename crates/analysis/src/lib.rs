//! finesse-analysis - input-log normalization and finesse fault classification.

mod faults;
mod normalize;
mod pipeline;

pub use faults::{analyze_piece, Fault, FinesseReport, Verdict};
pub use normalize::normalize_actions;
pub use pipeline::{
    analyze_session, try_analyze_session, PieceRecord, ReplayError, SessionResult, SessionStats,
};
