//! Per-tick metrics for the decision loop.
//!
//! [`DecisionMetrics`] captures what one [`decide`](crate::MdpAgent::decide)
//! call saw, how hard the solve worked, and what came out, enabling
//! telemetry and regression tests without logging from the hot path.

use prowl_core::Direction;

/// Counters and timings from the most recent decision.
///
/// Durations are in microseconds. A fresh struct is written on every
/// tick; early-out ticks (no maze, nothing legal) leave the planning
/// fields at their defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecisionMetrics {
    /// Wall-clock time for the whole decision, in microseconds.
    pub total_us: u64,
    /// Time spent inside the value-iteration solve, in microseconds.
    pub planning_us: u64,
    /// Sweeps the solve completed.
    pub sweeps: u32,
    /// Whether the solve converged below the tolerance.
    pub converged: bool,
    /// Largest per-cell change in the final sweep.
    pub final_delta: f64,
    /// Size of the legal-cell universe planned over.
    pub universe_cells: usize,
    /// Food cells that survived the sensor filter.
    pub sensed_food: usize,
    /// Capsule cells that survived the sensor filter.
    pub sensed_capsules: usize,
    /// Ghost contacts seen or heard this tick.
    pub sensed_ghosts: usize,
    /// Cells painted with a danger-zone reward.
    pub danger_cells: usize,
    /// Whether ghost and danger rewards were inverted this tick.
    pub sign_flipped: bool,
    /// The greedy action before execution noise.
    pub planned: Direction,
    /// The action actually returned to the host.
    pub executed: Direction,
    /// Whether execution noise changed the outcome.
    pub diverged: bool,
    /// Whether the maze model was rebuilt from the host this tick.
    pub maze_rebuilt: bool,
    /// Whether the solve reused the previous tick's values.
    pub warm_started: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = DecisionMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.planning_us, 0);
        assert_eq!(m.sweeps, 0);
        assert!(!m.converged);
        assert_eq!(m.final_delta, 0.0);
        assert_eq!(m.universe_cells, 0);
        assert_eq!(m.sensed_food, 0);
        assert_eq!(m.sensed_capsules, 0);
        assert_eq!(m.sensed_ghosts, 0);
        assert_eq!(m.danger_cells, 0);
        assert!(!m.sign_flipped);
        assert_eq!(m.planned, Direction::Stop);
        assert_eq!(m.executed, Direction::Stop);
        assert!(!m.diverged);
        assert!(!m.maze_rebuilt);
        assert!(!m.warm_started);
    }

    #[test]
    fn metrics_fields_accessible() {
        let m = DecisionMetrics {
            total_us: 420,
            planning_us: 390,
            sweeps: 37,
            converged: true,
            final_delta: 4.2e-4,
            universe_cells: 9,
            sensed_food: 2,
            sensed_capsules: 1,
            sensed_ghosts: 1,
            danger_cells: 3,
            sign_flipped: true,
            planned: Direction::North,
            executed: Direction::West,
            diverged: true,
            maze_rebuilt: true,
            warm_started: false,
        };
        assert_eq!(m.total_us, 420);
        assert_eq!(m.sweeps, 37);
        assert_eq!(m.planned, Direction::North);
        assert_eq!(m.executed, Direction::West);
        assert!(m.diverged);
    }
}
