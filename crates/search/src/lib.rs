//! finesse-search - minimal input sequence search for piece placements.

mod pathfinder;

pub use pathfinder::{find_paths, find_paths_from, minimal_length, PathConfig};
