//! The host-engine seam: ghost sightings and the [`GameState`] trait.

use crate::cell::Cell;
use crate::direction::Direction;
use smallvec::SmallVec;

/// A raw ghost record as reported by the host engine.
///
/// Ghost positions are floating point because hosts interpolate ghost
/// motion between cells during animation frames. The sensor layer
/// snaps sightings to grid cells before planning sees them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostSighting {
    /// World-space x position, possibly between cells.
    pub x: f64,
    /// World-space y position, possibly between cells.
    pub y: f64,
    /// Remaining ticks of the ghost's scared (edible) state. Zero
    /// means the ghost is dangerous.
    pub scared_ticks: u32,
}

impl GhostSighting {
    /// Create a sighting at `(x, y)` with the given scared timer.
    pub fn new(x: f64, y: f64, scared_ticks: u32) -> Self {
        Self { x, y, scared_ticks }
    }

    /// Whether the ghost is currently scared (edible).
    pub fn is_scared(&self) -> bool {
        self.scared_ticks > 0
    }

    /// The grid cell this sighting occupies, truncating sub-cell
    /// motion the way the host engine reports integer positions.
    pub fn cell(&self) -> Cell {
        Cell::new(self.x as i32, self.y as i32)
    }
}

/// Read access to the host game engine's view of the world.
///
/// This trait decouples the decision loop from any particular game
/// engine: the agent reads the world exclusively through it and hands
/// back exactly one [`Direction`] per tick. Map loading, legal-action
/// enumeration, and scorekeeping stay on the host side.
///
/// All methods describe the current tick. The wall set is expected to
/// be fixed for the lifetime of a map; the agent detects a changed
/// wall set or changed dimensions and rebuilds its maze model.
pub trait GameState {
    /// The agent's current cell.
    fn agent_position(&self) -> Cell;

    /// The direction of the agent's last move, or [`Direction::Stop`]
    /// if it is stationary. Hosts with unrecognized facing values
    /// report `Stop`, which widens sensing to all four directions.
    fn agent_facing(&self) -> Direction;

    /// The actions legal at the agent's current cell, including
    /// `Stop`.
    fn legal_actions(&self) -> SmallVec<[Direction; 5]>;

    /// Map dimensions as `(width, height)` in cells.
    fn map_dimensions(&self) -> (u32, u32);

    /// Every wall cell on the map.
    fn walls(&self) -> Vec<Cell>;

    /// Every cell currently holding food.
    fn food(&self) -> Vec<Cell>;

    /// Every cell currently holding a power capsule.
    fn capsules(&self) -> Vec<Cell>;

    /// All ghosts with their raw positions and scared timers.
    fn ghosts(&self) -> Vec<GhostSighting>;
}
