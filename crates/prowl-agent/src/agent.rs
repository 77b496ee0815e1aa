//! The reactive MDP agent.

use std::time::Instant;

use prowl_core::{Direction, GameState};
use prowl_grid::Maze;
use prowl_plan::{RewardMap, TransitionModel, ValueFunction, ValueIterationPlanner};
use prowl_sense::SensorModel;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::{AgentConfig, ConfigError};
use crate::metrics::DecisionMetrics;

/// A planning agent that re-solves its world every tick.
///
/// The agent holds no policy between ticks. Each
/// [`decide`](MdpAgent::decide) call senses the current state, paints
/// rewards over the maze's legal universe, runs value iteration, and
/// draws the executed move through the execution-noise model. The
/// previous tick's value table is kept purely as a warm start and is
/// discarded whenever the host's map changes shape.
pub struct MdpAgent {
    config: AgentConfig,
    sensor: SensorModel,
    planner: ValueIterationPlanner,
    maze: Option<Maze>,
    values: Option<ValueFunction>,
    metrics: DecisionMetrics,
    ticks: u64,
}

impl MdpAgent {
    /// Build an agent, validating `config` first.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sensor = SensorModel::new(
            config.partial_visibility,
            config.visibility_limit,
            config.side_limit,
            config.hearing_limit,
        );
        let planner = ValueIterationPlanner::new(
            TransitionModel::new(config.noise),
            config.discount,
            config.theta,
            config.max_iterations,
        );
        Ok(Self {
            config,
            sensor,
            planner,
            maze: None,
            values: None,
            metrics: DecisionMetrics::default(),
            ticks: 0,
        })
    }

    /// Decide one move for the current host state.
    ///
    /// Always returns a direction. Degenerate situations resolve to
    /// [`Direction::Stop`]: an unbuildable or fully walled map, an
    /// agent standing outside the legal universe, or a tick with no
    /// legal cardinal move. Metrics for the tick are readable from
    /// [`last_metrics`](MdpAgent::last_metrics) afterwards.
    pub fn decide<S: GameState + ?Sized>(&mut self, state: &S) -> Direction {
        let started = Instant::now();
        self.ticks = self.ticks.wrapping_add(1);
        let mut metrics = DecisionMetrics::default();

        self.sync_maze(state, &mut metrics);
        let Some(maze) = self.maze.as_ref() else {
            return self.finish(started, metrics);
        };
        metrics.universe_cells = maze.legal_cells().len();

        let agent = state.agent_position();
        let legal = state.legal_actions();

        // Nothing to plan for when the agent cannot move, or when it
        // stands somewhere the maze model does not cover.
        let movable = legal.iter().any(|&action| action != Direction::Stop);
        if !movable || !maze.is_open(agent) {
            return self.finish(started, metrics);
        }

        let observation = self.sensor.observe(state, maze);
        metrics.sensed_food = observation.food.len();
        metrics.sensed_capsules = observation.capsules.len();
        metrics.sensed_ghosts = observation.ghosts.len();

        let rewards = RewardMap::build(maze, &observation, &self.config.reward_profile());
        metrics.danger_cells = rewards.danger_cell_count();
        metrics.sign_flipped = rewards.sign_flipped();

        let planning = Instant::now();
        let solution = self.planner.solve(maze, &rewards, self.values.as_ref());
        metrics.planning_us = planning.elapsed().as_micros() as u64;
        metrics.sweeps = solution.stats.sweeps;
        metrics.converged = solution.stats.converged;
        metrics.final_delta = solution.stats.final_delta;
        metrics.warm_started = solution.stats.warm_started;

        let planned =
            match self
                .planner
                .best_action(maze, &rewards, &solution.values, agent, &legal)
            {
                Some(direction) => direction,
                None => {
                    self.values = Some(solution.values);
                    return self.finish(started, metrics);
                }
            };
        metrics.planned = planned;

        let executed = self.draw_execution(planned, &legal);
        metrics.executed = executed;
        metrics.diverged = executed != planned;

        self.values = Some(solution.values);
        self.finish(started, metrics)
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Metrics from the most recent [`decide`](MdpAgent::decide) call.
    pub fn last_metrics(&self) -> &DecisionMetrics {
        &self.metrics
    }

    /// How many decisions this agent has made.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rebuild the maze model when the host's map changes shape,
    /// dropping any value table solved against the old map.
    fn sync_maze<S: GameState + ?Sized>(&mut self, state: &S, metrics: &mut DecisionMetrics) {
        let (width, height) = state.map_dimensions();
        // Hosts may report the same wall cell more than once; the
        // change test compares distinct cells.
        let mut walls = state.walls();
        walls.sort_unstable();
        walls.dedup();
        let unchanged = self.maze.as_ref().is_some_and(|maze| {
            maze.width() == width
                && maze.height() == height
                && maze.wall_count() == walls.len()
                && walls.iter().all(|&cell| maze.is_wall(cell))
        });
        if unchanged {
            return;
        }
        metrics.maze_rebuilt = true;
        self.values = None;
        self.maze = Maze::new(width, height, walls).ok();
    }

    /// Apply execution noise to the planned move.
    ///
    /// One RNG stream per tick, so a replayed tick draws identical
    /// noise no matter what earlier ticks consumed.
    fn draw_execution(&self, planned: Direction, legal: &[Direction]) -> Direction {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed ^ self.ticks);
        let drawn = if rng.random::<f64>() <= self.config.direction_execution_probability {
            planned
        } else {
            match planned.perpendicular() {
                Some([left, right]) => {
                    if rng.random::<bool>() {
                        left
                    } else {
                        right
                    }
                }
                None => planned,
            }
        };
        if legal.contains(&drawn) {
            drawn
        } else {
            Direction::Stop
        }
    }

    fn finish(&mut self, started: Instant, mut metrics: DecisionMetrics) -> Direction {
        metrics.total_us = started.elapsed().as_micros() as u64;
        let executed = metrics.executed;
        self.metrics = metrics;
        executed
    }
}
