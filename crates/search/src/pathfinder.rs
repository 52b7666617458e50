//! All-shortest-paths search over piece (column, rotation) states.
//!
//! Nodes are (column, rotation) pairs; the row is pinned to the spawn row
//! where the piece slides before the terminal drop. BFS depth labeling
//! collects every predecessor edge tied at the minimum, then minimal
//! sequences are enumerated backward from the target. Unit edge cost makes
//! the first dequeue of the target optimal by construction; an unreachable
//! target yields an empty result, which is expected for many (piece, target)
//! pairs (e.g. rotating the O piece).

use std::collections::VecDeque;

use finesse_core::{Board, Direction, FinesseToken, Piece, Placement, Rotation, RotationDir};
use finesse_engine::{can_place, slide_col, try_rotate, try_shift};
use rustc_hash::FxHashSet;

/// Search options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathConfig {
    /// Allow DAS-to-wall edges (a fully-held direction as one action).
    pub allow_das: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self { allow_das: true }
    }
}

// Columns run -2..WIDTH+1 to admit negative bounding-box origins; flat
// indices carry a +2 offset, matching the mino-table box width of 4.
const COLS: usize = Board::WIDTH + 4;
const NODES: usize = COLS * 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Node {
    col: i8,
    rotation: Rotation,
}

fn node_index(col: i8, rotation: Rotation) -> Option<usize> {
    let ci = col as i16 + 2;
    if ci < 0 || ci >= COLS as i16 {
        return None;
    }
    Some(rotation as usize * COLS + ci as usize)
}

/// Every minimal input sequence from the spawn placement to `target`,
/// each terminated by a hard drop. Empty board assumed when `board` is None.
pub fn find_paths(
    target: &Placement,
    config: &PathConfig,
    board: Option<&Board>,
) -> Vec<Vec<FinesseToken>> {
    let spawn = Placement::spawn(target.piece);
    find_paths_from(
        target.piece,
        spawn.col,
        spawn.rotation,
        target.col,
        target.rotation,
        config,
        board,
    )
}

/// Length of a minimal sequence to `target` from spawn, hard drop included.
/// None when the target is unreachable.
pub fn minimal_length(
    target: &Placement,
    config: &PathConfig,
    board: Option<&Board>,
) -> Option<usize> {
    find_paths(target, config, board).first().map(|seq| seq.len())
}

/// Every minimal input sequence between two (column, rotation) states.
pub fn find_paths_from(
    piece: Piece,
    start_col: i8,
    start_rot: Rotation,
    target_col: i8,
    target_rot: Rotation,
    config: &PathConfig,
    board: Option<&Board>,
) -> Vec<Vec<FinesseToken>> {
    let empty;
    let board = match board {
        Some(b) => b,
        None => {
            empty = Board::new();
            &empty
        }
    };
    let row = piece.spawn_row();

    let start = Node {
        col: start_col,
        rotation: start_rot,
    };
    let target = Node {
        col: target_col,
        rotation: target_rot,
    };

    let start_idx = match node_index(start.col, start.rotation) {
        Some(i) => i,
        None => return Vec::new(),
    };
    if node_index(target.col, target.rotation).is_none() {
        return Vec::new();
    }
    if !can_place(board, piece, start.rotation, start.col, row)
        || !can_place(board, piece, target.rotation, target.col, row)
    {
        return Vec::new();
    }

    if start == target {
        return vec![vec![FinesseToken::HardDrop]];
    }

    // Flat array-indexed bookkeeping: the state space is small and dense.
    let mut depth = [-1i16; NODES];
    let mut preds: Vec<Vec<(Node, FinesseToken)>> = vec![Vec::new(); NODES];
    let mut queue = VecDeque::new();

    depth[start_idx] = 0;
    queue.push_back((start, 0i16));
    let mut target_depth: Option<i16> = None;

    while let Some((node, d)) = queue.pop_front() {
        // past the first-found minimum the frontier cannot improve
        if let Some(td) = target_depth {
            if d + 1 > td {
                break;
            }
        }
        for (next, token) in neighbors(board, piece, row, node, config) {
            let idx = match node_index(next.col, next.rotation) {
                Some(i) => i,
                None => continue,
            };
            if depth[idx] < 0 {
                depth[idx] = d + 1;
                preds[idx].push((node, token));
                queue.push_back((next, d + 1));
                if next == target {
                    target_depth = Some(d + 1);
                }
            } else if depth[idx] == d + 1 {
                // another edge tied at the minimum
                preds[idx].push((node, token));
            }
        }
    }

    if target_depth.is_none() {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut seen = FxHashSet::default();
    let mut stack = Vec::new();
    collect_paths(&preds, target, start, &mut stack, &mut out, &mut seen);
    out
}

/// Neighbor states in a fixed order (step L/R, rotate CW/CCW, DAS L/R) for
/// deterministic tie-breaking.
fn neighbors(
    board: &Board,
    piece: Piece,
    row: i8,
    node: Node,
    config: &PathConfig,
) -> Vec<(Node, FinesseToken)> {
    let mut out = Vec::with_capacity(6);

    for dir in [Direction::Left, Direction::Right] {
        if let Some(col) = try_shift(board, piece, node.rotation, node.col, row, dir.delta()) {
            out.push((
                Node {
                    col,
                    rotation: node.rotation,
                },
                FinesseToken::step(dir),
            ));
        }
    }

    for rot_dir in [RotationDir::Cw, RotationDir::Ccw] {
        if let Some(result) = try_rotate(board, piece, node.rotation, node.col, row, rot_dir) {
            // a kick may shift the column; the row stays pinned to the
            // sliding plane
            out.push((
                Node {
                    col: result.col,
                    rotation: result.rotation,
                },
                FinesseToken::rotate(rot_dir),
            ));
        }
    }

    if config.allow_das {
        for dir in [Direction::Left, Direction::Right] {
            let col = slide_col(board, piece, node.rotation, node.col, row, dir.delta());
            if col != node.col {
                out.push((
                    Node {
                        col,
                        rotation: node.rotation,
                    },
                    FinesseToken::das(dir),
                ));
            }
        }
    }

    out
}

/// Walk predecessor edges from `node` back to `start`, emitting each minimal
/// sequence with its terminal hard drop.
fn collect_paths(
    preds: &[Vec<(Node, FinesseToken)>],
    node: Node,
    start: Node,
    stack: &mut Vec<FinesseToken>,
    out: &mut Vec<Vec<FinesseToken>>,
    seen: &mut FxHashSet<Vec<FinesseToken>>,
) {
    if node == start {
        let mut path: Vec<FinesseToken> = stack.iter().rev().copied().collect();
        path.push(FinesseToken::HardDrop);
        if seen.insert(path.clone()) {
            out.push(path);
        }
        return;
    }
    let idx = match node_index(node.col, node.rotation) {
        Some(i) => i,
        None => return,
    };
    for &(prev, token) in &preds[idx] {
        stack.push(token);
        collect_paths(preds, prev, start, stack, out, seen);
        stack.pop();
    }
}
