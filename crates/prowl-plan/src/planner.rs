//! Synchronous value-iteration sweeps and the greedy policy query.

use prowl_core::{Cell, Direction};
use prowl_grid::Maze;

use crate::reward::RewardMap;
use crate::transition::TransitionModel;
use crate::value::ValueFunction;

/// Counters from one [`ValueIterationPlanner::solve`] call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolveStats {
    /// Completed sweeps over the universe.
    pub sweeps: u32,
    /// Largest per-cell value change in the last completed sweep.
    pub final_delta: f64,
    /// Whether `final_delta` fell below the tolerance before the
    /// sweep cap.
    pub converged: bool,
    /// Whether the solve reused a previous tick's values.
    pub warm_started: bool,
}

/// A solved value table along with how the solve went.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Values over the maze's legal universe.
    pub values: ValueFunction,
    /// Sweep counters for metrics and tests.
    pub stats: SolveStats,
}

/// Synchronous value iteration over a maze's legal universe.
///
/// Every sweep reads a frozen snapshot of the previous sweep's values
/// and writes a fresh table, so in-sweep ordering can never bleed new
/// values into the same sweep. Sweeps maximise over all four cardinal
/// moves at every cell; blocked moves price in staying put through
/// the [`TransitionModel`]. Iteration stops once the largest per-cell
/// change drops below `theta`, or silently at `max_iterations` with
/// the best table found so far.
#[derive(Clone, Copy, Debug)]
pub struct ValueIterationPlanner {
    transition: TransitionModel,
    discount: f64,
    theta: f64,
    max_iterations: u32,
}

impl ValueIterationPlanner {
    /// Create a planner.
    ///
    /// Callers validate `discount` into `[0, 1)`, `theta` positive and
    /// finite, and `max_iterations` nonzero.
    pub fn new(transition: TransitionModel, discount: f64, theta: f64, max_iterations: u32) -> Self {
        Self {
            transition,
            discount,
            theta,
            max_iterations,
        }
    }

    /// The movement model sweeps price outcomes with.
    pub fn transition(&self) -> &TransitionModel {
        &self.transition
    }

    /// Expected discounted return of attempting `action` from `cell`:
    /// the outcome-weighted sum of each successor's reward plus its
    /// discounted value.
    pub fn q_value(
        &self,
        maze: &Maze,
        rewards: &RewardMap,
        values: &ValueFunction,
        cell: Cell,
        action: Direction,
    ) -> f64 {
        self.transition
            .distribution(maze, cell, action)
            .iter()
            .map(|&(next, mass)| mass * (rewards.get(next) + self.discount * values.get(next)))
            .sum()
    }

    /// Solve for the value table induced by `rewards`.
    ///
    /// `warm_start` seeds the sweep when it carries the current maze's
    /// instance id; a table from any other maze is ignored and the
    /// solve starts from zero. Hitting the sweep cap is not an error;
    /// the capped table is still the best available estimate.
    pub fn solve(
        &self,
        maze: &Maze,
        rewards: &RewardMap,
        warm_start: Option<&ValueFunction>,
    ) -> Solution {
        let warm = warm_start.filter(|table| table.maze_id() == maze.instance_id());
        let mut stats = SolveStats {
            warm_started: warm.is_some(),
            ..SolveStats::default()
        };

        let mut values = match warm {
            Some(table) => table.clone(),
            None => ValueFunction::zeroed(maze),
        };
        let mut scratch = values.clone();

        for _ in 0..self.max_iterations {
            let mut delta = 0.0f64;
            for &cell in maze.legal_cells() {
                let best = Direction::CARDINALS
                    .into_iter()
                    .map(|action| self.q_value(maze, rewards, &values, cell, action))
                    .fold(f64::NEG_INFINITY, f64::max);
                delta = delta.max((best - values.get(cell)).abs());
                scratch.set(cell, best);
            }
            // The scratch table becomes the new snapshot; the old one
            // is overwritten wholesale next sweep.
            std::mem::swap(&mut values, &mut scratch);
            stats.sweeps += 1;
            stats.final_delta = delta;
            if delta < self.theta {
                stats.converged = true;
                break;
            }
        }

        Solution { values, stats }
    }

    /// The greedy action at `cell` among the host's legal actions.
    ///
    /// `Stop` and directions missing from `legal` are never chosen;
    /// ties resolve to the earlier entry in [`Direction::CARDINALS`].
    /// Returns `None` when no legal cardinal exists.
    pub fn best_action(
        &self,
        maze: &Maze,
        rewards: &RewardMap,
        values: &ValueFunction,
        cell: Cell,
        legal: &[Direction],
    ) -> Option<Direction> {
        let mut best: Option<(Direction, f64)> = None;
        for action in Direction::CARDINALS {
            if !legal.contains(&action) {
                continue;
            }
            let q = self.q_value(maze, rewards, values, cell, action);
            let better = match best {
                Some((_, best_q)) => q > best_q,
                None => true,
            };
            if better {
                best = Some((action, q));
            }
        }
        best.map(|(action, _)| action)
    }
}
