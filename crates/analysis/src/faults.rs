//! Fault classification - diffing a player's inputs against optimal play.

use finesse_core::{Action, FinesseToken};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_actions;

/// A classified discrepancy between the player's inputs and optimal play.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Fault {
    /// More inputs than necessary (removable actions present).
    ExtraInput { used: usize, minimal: usize },
    /// At or under the minimum but not a valid sequence for the target -
    /// wrong actions, or no terminating hard drop.
    SuboptimalPath { used: usize, minimal: usize },
    /// The search produced no sequence for this target at all.
    UnreachableTarget,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Verdict {
    Optimal,
    Faulty,
}

/// Outcome of analyzing one piece's lifetime.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FinesseReport {
    pub verdict: Verdict,
    pub faults: Vec<Fault>,
    /// The player's normalized token sequence.
    pub player_sequence: Vec<FinesseToken>,
    /// Length of a minimal sequence, when one exists.
    pub minimal_length: Option<usize>,
}

impl FinesseReport {
    pub fn is_optimal(&self) -> bool {
        self.verdict == Verdict::Optimal
    }
}

/// Compare a piece's recorded action log against the optimal sequence set.
///
/// All sequences in `optimal` tie at the minimum by construction, so the
/// first one's length is the minimal length. An empty `optimal` set is
/// surfaced as a fault, never an error.
pub fn analyze_piece(actions: &[Action], optimal: &[Vec<FinesseToken>]) -> FinesseReport {
    let player_sequence = normalize_actions(actions);

    if optimal.is_empty() {
        return FinesseReport {
            verdict: Verdict::Faulty,
            faults: vec![Fault::UnreachableTarget],
            player_sequence,
            minimal_length: None,
        };
    }

    let minimal = optimal[0].len();

    if optimal.iter().any(|seq| seq == &player_sequence) {
        return FinesseReport {
            verdict: Verdict::Optimal,
            faults: Vec::new(),
            player_sequence,
            minimal_length: Some(minimal),
        };
    }

    let used = player_sequence.len();
    let fault = if used > minimal {
        Fault::ExtraInput { used, minimal }
    } else {
        Fault::SuboptimalPath { used, minimal }
    };

    FinesseReport {
        verdict: Verdict::Faulty,
        faults: vec![fault],
        player_sequence,
        minimal_length: Some(minimal),
    }
}
