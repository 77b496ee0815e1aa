//! Reward shaping and value-iteration planning for the Prowl agent.
//!
//! Each tick the agent rebuilds a [`RewardMap`] from its latest
//! observation, runs [`ValueIterationPlanner`] to convergence (or to
//! the sweep cap) over the maze's legal-cell universe, and reads the
//! greedy action off the resulting [`ValueFunction`]. The
//! [`TransitionModel`] injects movement stochasticity into planning so
//! the agent accounts for slippage before it happens.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod danger;
pub mod planner;
pub mod reward;
pub mod transition;
pub mod value;

pub use danger::danger_zones;
pub use planner::{Solution, SolveStats, ValueIterationPlanner};
pub use reward::{RewardMap, RewardProfile, TargetPolicy};
pub use transition::TransitionModel;
pub use value::ValueFunction;
