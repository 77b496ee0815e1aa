//! The per-tick sensed snapshot.

use prowl_core::{Cell, Direction};

/// A ghost the agent can currently perceive, snapped to its grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GhostContact {
    /// The cell the ghost occupies.
    pub cell: Cell,
    /// Whether the ghost is scared (edible) this tick.
    pub scared: bool,
}

/// Everything the agent sensed on one decision tick.
///
/// An observation is ephemeral: it is rebuilt from scratch every tick
/// and never cached, so a ghost that moves out of sensor range simply
/// stops existing as far as planning is concerned.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// The agent's own cell.
    pub agent: Cell,
    /// The agent's facing at sensing time.
    pub facing: Direction,
    /// Sensed food cells.
    pub food: Vec<Cell>,
    /// Sensed capsule cells.
    pub capsules: Vec<Cell>,
    /// Sensed ghosts with their scared flags.
    pub ghosts: Vec<GhostContact>,
}

impl Observation {
    /// The cells of all sensed ghosts, in sighting order.
    pub fn ghost_cells(&self) -> Vec<Cell> {
        self.ghosts.iter().map(|g| g.cell).collect()
    }

    /// Whether every sensed ghost is scared.
    ///
    /// Returns `false` when no ghosts are sensed: the all-scared state
    /// only exists while there is at least one ghost to be scared.
    pub fn all_ghosts_scared(&self) -> bool {
        !self.ghosts.is_empty() && self.ghosts.iter().all(|g| g.scared)
    }
}
