//! Stochastic movement model shared by planning and analysis.

use prowl_core::{Cell, Direction};
use prowl_grid::Maze;
use smallvec::{smallvec, SmallVec};

/// Outcome distribution for one attempted move.
///
/// At most three distinct successors exist (primary target plus the
/// two perpendicular slips), and blocked outcomes collapse onto the
/// origin cell, so four inline slots cover every case.
pub type OutcomeDistribution = SmallVec<[(Cell, f64); 4]>;

/// The movement noise model used during planning.
///
/// An intended cardinal move succeeds with probability `1 - noise`;
/// the remaining mass splits evenly between the two perpendicular
/// directions. Any outcome whose target is blocked resolves to the
/// origin cell, and outcomes landing on the same cell are merged, so
/// the returned distribution always sums to one over distinct cells.
#[derive(Clone, Copy, Debug)]
pub struct TransitionModel {
    noise: f64,
}

impl TransitionModel {
    /// Create a model with the given slip probability.
    ///
    /// `noise` is the total probability of moving perpendicular to the
    /// intended direction; callers validate it into `[0, 1]`.
    pub fn new(noise: f64) -> Self {
        Self { noise }
    }

    /// The configured slip probability.
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// The successor distribution for attempting `action` from `cell`.
    ///
    /// `Stop` (and only `Stop`) is deterministic: the agent stays put
    /// with probability one. Outcomes with zero mass are dropped, so a
    /// noiseless model yields a single entry.
    pub fn distribution(&self, maze: &Maze, cell: Cell, action: Direction) -> OutcomeDistribution {
        let Some([left, right]) = action.perpendicular() else {
            return smallvec![(cell, 1.0)];
        };

        let mut outcomes: OutcomeDistribution = SmallVec::new();
        let mut add = |target: Cell, mass: f64| {
            if mass <= 0.0 {
                return;
            }
            for entry in outcomes.iter_mut() {
                if entry.0 == target {
                    entry.1 += mass;
                    return;
                }
            }
            outcomes.push((target, mass));
        };

        add(maze.resolve_move(cell, action), 1.0 - self.noise);
        add(maze.resolve_move(cell, left), self.noise / 2.0);
        add(maze.resolve_move(cell, right), self.noise / 2.0);
        outcomes
    }
}
