//! Action-log normalization into the canonical finesse alphabet.
//!
//! Finesse only cares about discrete inputs: movement starts, rotations, and
//! the hard drop. A hold-start plus every following same-direction
//! hold-move/repeat-move collapses into a single DAS token (the repeat count
//! is irrelevant). A provisional tap immediately superseded by a hold-start
//! in the same direction is retracted - the tap was the first cell of that
//! hold-run, not its own input. Any intervening token confirms the tap: in
//! particular a hold starting in the *opposite* direction leaves it standing,
//! because the tap's movement already completed before the reversal.

use finesse_core::{Action, ActionKind, Direction, FinesseToken};

pub fn normalize_actions(actions: &[Action]) -> Vec<FinesseToken> {
    let mut tokens: Vec<FinesseToken> = Vec::new();
    // provisional-tap slot: index of the tap token + its direction,
    // cleared by whatever resolves it
    let mut pending_tap: Option<(usize, Direction)> = None;
    // direction of the hold-run currently absorbing repeat pulses
    let mut hold_run: Option<Direction> = None;

    for action in actions {
        match action.kind {
            ActionKind::TapMove(dir) => {
                hold_run = None;
                tokens.push(FinesseToken::step(dir));
                pending_tap = Some((tokens.len() - 1, dir));
            }
            ActionKind::HoldStart(dir) => {
                if let Some((idx, tap_dir)) = pending_tap.take() {
                    if tap_dir == dir {
                        // the tap guess was wrong: fold it into the hold-run
                        tokens[idx] = FinesseToken::das(dir);
                        hold_run = Some(dir);
                        continue;
                    }
                }
                tokens.push(FinesseToken::das(dir));
                hold_run = Some(dir);
            }
            ActionKind::HoldMove(dir) | ActionKind::RepeatMove(dir) => {
                if hold_run != Some(dir) {
                    // repeat with no visible hold-start; open a run for it
                    pending_tap = None;
                    tokens.push(FinesseToken::das(dir));
                    hold_run = Some(dir);
                }
                // pulses inside the run are absorbed
            }
            ActionKind::Rotate(dir) => {
                pending_tap = None;
                hold_run = None;
                tokens.push(FinesseToken::rotate(dir));
            }
            ActionKind::HardDrop => {
                pending_tap = None;
                hold_run = None;
                tokens.push(FinesseToken::HardDrop);
            }
            // vertical speed is not finesse-relevant
            ActionKind::SoftDrop => {}
        }
    }

    tokens
}
