//! Corridor visibility, audibility, and the [`SensorModel`].

use crate::observation::{GhostContact, Observation};
use prowl_core::{Cell, Direction, GameState, GhostSighting};
use prowl_grid::Maze;

/// Walk a ray from `origin` in `direction`, up to `limit` cells or the
/// first blocked cell. The origin itself is not part of the ray.
fn ray(maze: &Maze, origin: Cell, direction: Direction, limit: u32) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut cursor = origin;
    for _ in 0..limit {
        cursor = cursor.translate(direction);
        if !maze.is_open(cursor) {
            break;
        }
        cells.push(cursor);
    }
    cells
}

/// The agent's sensing model.
///
/// Visibility is corridor-shaped: a moving agent sees along its facing
/// up to `visibility_limit` cells and down both perpendicular side
/// corridors up to `side_limit` cells, with walls cutting every
/// corridor short. A stationary agent (facing [`Direction::Stop`])
/// sees along all four corridors at the full `visibility_limit`.
/// Hearing is a plain Manhattan radius that ignores walls and applies
/// to ghosts only.
///
/// With `partial_visibility` off, [`visible`](SensorModel::visible)
/// returns its input unchanged and the model is a passthrough.
#[derive(Clone, Copy, Debug)]
pub struct SensorModel {
    partial_visibility: bool,
    visibility_limit: u32,
    side_limit: u32,
    hearing_limit: u32,
}

impl SensorModel {
    /// Create a sensor model.
    ///
    /// `visibility_limit` bounds the forward corridor, `side_limit`
    /// the perpendicular corridors, and `hearing_limit` the Manhattan
    /// hearing radius for ghosts.
    pub fn new(
        partial_visibility: bool,
        visibility_limit: u32,
        side_limit: u32,
        hearing_limit: u32,
    ) -> Self {
        Self {
            partial_visibility,
            visibility_limit,
            side_limit,
            hearing_limit,
        }
    }

    /// Whether this model filters at all.
    pub fn is_partial(&self) -> bool {
        self.partial_visibility
    }

    /// The corridor cells the agent can currently see into.
    ///
    /// A cardinal facing yields the forward corridor plus both side
    /// corridors; `Stop` yields all four corridors at full range.
    fn corridor(&self, agent: Cell, facing: Direction, maze: &Maze) -> Vec<Cell> {
        let mut cells = Vec::new();
        match facing.perpendicular() {
            Some([left, right]) => {
                cells.extend(ray(maze, agent, facing, self.visibility_limit));
                cells.extend(ray(maze, agent, left, self.side_limit));
                cells.extend(ray(maze, agent, right, self.side_limit));
            }
            None => {
                for direction in Direction::CARDINALS {
                    cells.extend(ray(maze, agent, direction, self.visibility_limit));
                }
            }
        }
        cells
    }

    /// Filter `objects` down to those the agent can see.
    ///
    /// The corridor filter is computed regardless of the visibility
    /// toggle; full observability only changes which set is returned.
    /// The result preserves the input order. The agent's own cell is
    /// not part of any corridor, so an object the agent is standing on
    /// is invisible under partial visibility.
    pub fn visible(
        &self,
        objects: &[Cell],
        agent: Cell,
        facing: Direction,
        maze: &Maze,
    ) -> Vec<Cell> {
        let corridor = self.corridor(agent, facing, maze);
        let filtered: Vec<Cell> = objects
            .iter()
            .copied()
            .filter(|cell| corridor.contains(cell))
            .collect();
        if self.partial_visibility {
            filtered
        } else {
            objects.to_vec()
        }
    }

    /// Filter `objects` down to those within hearing range.
    ///
    /// Hearing is omnidirectional and penetrates walls; it applies the
    /// same way whether or not visibility is partial.
    pub fn audible(&self, objects: &[Cell], agent: Cell) -> Vec<Cell> {
        objects
            .iter()
            .copied()
            .filter(|cell| agent.manhattan_distance(*cell) <= self.hearing_limit)
            .collect()
    }

    /// The ghosts the agent can currently perceive: those visible or
    /// audible, snapped to grid cells, with their scared flags.
    ///
    /// Two ghosts on the same cell produce two contacts; the all-scared
    /// test quantifies over ghosts, not cells.
    pub fn ghost_contacts(
        &self,
        sightings: &[GhostSighting],
        agent: Cell,
        facing: Direction,
        maze: &Maze,
    ) -> Vec<GhostContact> {
        let cells: Vec<Cell> = sightings.iter().map(GhostSighting::cell).collect();
        let seen = self.visible(&cells, agent, facing, maze);
        let heard = self.audible(&cells, agent);
        sightings
            .iter()
            .zip(&cells)
            .filter(|(_, cell)| seen.contains(cell) || heard.contains(cell))
            .map(|(sighting, cell)| GhostContact {
                cell: *cell,
                scared: sighting.is_scared(),
            })
            .collect()
    }

    /// Sense every entity class from the host state in one pass.
    pub fn observe<S: GameState + ?Sized>(&self, state: &S, maze: &Maze) -> Observation {
        let agent = state.agent_position();
        let facing = state.agent_facing();
        Observation {
            agent,
            facing,
            food: self.visible(&state.food(), agent, facing, maze),
            capsules: self.visible(&state.capsules(), agent, facing, maze),
            ghosts: self.ghost_contacts(&state.ghosts(), agent, facing, maze),
        }
    }
}
