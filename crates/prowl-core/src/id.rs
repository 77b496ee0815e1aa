//! Strongly-typed instance identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`MazeInstanceId`] allocation.
static MAZE_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a maze.
///
/// Allocated from a monotonic atomic counter via
/// [`MazeInstanceId::next`]. Two distinct maze instances always have
/// different IDs, even when their topology is identical. Value
/// functions are tagged with the maze they were solved against, so a
/// rebuilt maze invalidates any warm start instead of silently reusing
/// values from a different wall layout.
///
/// Cloning a maze preserves its instance ID, which is correct because
/// immutable mazes with the same ID have the same walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MazeInstanceId(u64);

impl MazeInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns an ID never returned before within this
    /// process. Thread-safe.
    pub fn next() -> Self {
        Self(MAZE_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MazeInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_unique() {
        let a = MazeInstanceId::next();
        let b = MazeInstanceId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_are_monotonic() {
        let a = MazeInstanceId::next();
        let b = MazeInstanceId::next();
        assert!(b > a);
    }
}
