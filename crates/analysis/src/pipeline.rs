//! Batch analysis of a recorded training session.

use finesse_core::{Action, Placement};
use finesse_search::{find_paths, PathConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::faults::{analyze_piece, Fault, FinesseReport};

/// One piece's lifetime: where it locked and what the player pressed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PieceRecord {
    pub target: Placement,
    pub actions: Vec<Action>,
}

/// Host contract violations detected before analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("action log for piece {index} has out-of-order timestamps ({prev} then {next})")]
    NonMonotonicTimestamps { index: usize, prev: u64, next: u64 },
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_pieces: u32,
    pub optimal_pieces: u32,
    pub extra_input_faults: u32,
    pub suboptimal_path_faults: u32,
    pub unreachable_targets: u32,
    /// Normalized inputs the player actually used.
    pub inputs_used: u32,
    /// Inputs a perfect player would have used, over pieces with a solution.
    pub inputs_minimal: u32,
}

impl SessionStats {
    /// Share of pieces placed optimally, 0-100. An empty session scores 100.
    pub fn accuracy(&self) -> f32 {
        if self.total_pieces == 0 {
            return 100.0;
        }
        100.0 * self.optimal_pieces as f32 / self.total_pieces as f32
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SessionResult {
    pub reports: Vec<FinesseReport>,
    pub stats: SessionStats,
}

/// Analyze every piece of a session. Per-piece analyses are independent and
/// run in parallel; results keep the input order.
pub fn analyze_session(records: &[PieceRecord]) -> SessionResult {
    debug!(pieces = records.len(), "analyzing session");
    let config = PathConfig::default();

    let reports: Vec<FinesseReport> = records
        .par_iter()
        .map(|record| {
            let optimal = find_paths(&record.target, &config, None);
            analyze_piece(&record.actions, &optimal)
        })
        .collect();

    let mut stats = SessionStats::default();
    for (index, report) in reports.iter().enumerate() {
        stats.total_pieces += 1;
        stats.inputs_used += report.player_sequence.len() as u32;
        if let Some(min) = report.minimal_length {
            stats.inputs_minimal += min as u32;
        }
        if report.is_optimal() {
            stats.optimal_pieces += 1;
        }
        for fault in &report.faults {
            match fault {
                Fault::ExtraInput { .. } => stats.extra_input_faults += 1,
                Fault::SuboptimalPath { .. } => stats.suboptimal_path_faults += 1,
                Fault::UnreachableTarget => {
                    warn!(piece = index, "no optimal sequence for recorded target");
                    stats.unreachable_targets += 1;
                }
            }
        }
    }

    SessionResult { reports, stats }
}

/// Like [`analyze_session`], but validates the host timestamp contract
/// (non-decreasing within each piece's log) first.
pub fn try_analyze_session(records: &[PieceRecord]) -> Result<SessionResult, ReplayError> {
    for (index, record) in records.iter().enumerate() {
        for pair in record.actions.windows(2) {
            if pair[1].time < pair[0].time {
                return Err(ReplayError::NonMonotonicTimestamps {
                    index,
                    prev: pair[0].time,
                    next: pair[1].time,
                });
            }
        }
    }
    Ok(analyze_session(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use finesse_core::{ActionKind, Direction, Piece, Rotation};

    fn record(target: Placement, kinds: &[ActionKind]) -> PieceRecord {
        PieceRecord {
            target,
            actions: kinds
                .iter()
                .enumerate()
                .map(|(i, &kind)| Action::new(kind, i as u64 * 10))
                .collect(),
        }
    }

    #[test]
    fn test_empty_session() {
        let result = analyze_session(&[]);
        assert!(result.reports.is_empty());
        assert_eq!(result.stats.total_pieces, 0);
        assert_eq!(result.stats.accuracy(), 100.0);
    }

    #[test]
    fn test_session_accumulates_stats() {
        let records = vec![
            // optimal: drop in place
            record(Placement::spawn(Piece::T), &[ActionKind::HardDrop]),
            // extra input: wiggle before dropping in place
            record(
                Placement::spawn(Piece::L),
                &[
                    ActionKind::TapMove(Direction::Left),
                    ActionKind::TapMove(Direction::Right),
                    ActionKind::HardDrop,
                ],
            ),
            // unreachable: O piece cannot rotate
            record(
                Placement::new(Piece::O, 4, Rotation::East),
                &[ActionKind::HardDrop],
            ),
        ];

        let result = analyze_session(&records);
        assert_eq!(result.stats.total_pieces, 3);
        assert_eq!(result.stats.optimal_pieces, 1);
        assert_eq!(result.stats.extra_input_faults, 1);
        assert_eq!(result.stats.unreachable_targets, 1);
        assert_eq!(result.stats.inputs_minimal, 2); // two solvable pieces
        assert!((result.stats.accuracy() - 33.333_332).abs() < 0.001);
    }

    #[test]
    fn test_reports_keep_input_order() {
        let records = vec![
            record(Placement::spawn(Piece::T), &[ActionKind::HardDrop]),
            record(
                Placement::new(Piece::T, 0, Rotation::North),
                &[
                    ActionKind::TapMove(Direction::Left),
                    ActionKind::HoldStart(Direction::Left),
                    ActionKind::HardDrop,
                ],
            ),
        ];
        let result = analyze_session(&records);
        assert_eq!(result.reports.len(), 2);
        assert!(result.reports[0].is_optimal());
        assert!(result.reports[1].is_optimal());
    }

    #[test]
    fn test_timestamp_contract_enforced() {
        let mut rec = record(Placement::spawn(Piece::T), &[ActionKind::HardDrop]);
        rec.actions.push(Action::new(ActionKind::SoftDrop, 0)); // goes backward
        rec.actions.insert(0, Action::new(ActionKind::SoftDrop, 5));

        let err = try_analyze_session(&[rec]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::NonMonotonicTimestamps {
                index: 0,
                prev: 5,
                next: 0,
            }
        );
    }

    #[test]
    fn test_checked_analysis_passes_valid_logs() {
        let records = vec![record(Placement::spawn(Piece::J), &[ActionKind::HardDrop])];
        let result = try_analyze_session(&records).expect("valid session");
        assert_eq!(result.stats.optimal_pieces, 1);
    }
}
