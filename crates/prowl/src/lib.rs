//! Prowl: a reactive MDP planning agent for partially observable,
//! stochastic grid worlds.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Prowl sub-crates. For most users, adding `prowl` as a
//! single dependency is sufficient: implement
//! [`GameState`](prelude::GameState) over your game engine, build an
//! [`MdpAgent`](prelude::MdpAgent), and call
//! [`decide`](prelude::MdpAgent::decide) once per tick.
//!
//! # Quick start
//!
//! ```rust
//! use prowl::prelude::*;
//! use smallvec::SmallVec;
//!
//! // A tiny host: a 3x3 open room with food in the far corner.
//! struct Room;
//! impl GameState for Room {
//!     fn agent_position(&self) -> Cell { Cell::new(0, 0) }
//!     fn agent_facing(&self) -> Direction { Direction::Stop }
//!     fn legal_actions(&self) -> SmallVec<[Direction; 5]> {
//!         [Direction::North, Direction::East, Direction::Stop]
//!             .into_iter()
//!             .collect()
//!     }
//!     fn map_dimensions(&self) -> (u32, u32) { (3, 3) }
//!     fn walls(&self) -> Vec<Cell> { Vec::new() }
//!     fn food(&self) -> Vec<Cell> { vec![Cell::new(2, 2)] }
//!     fn capsules(&self) -> Vec<Cell> { Vec::new() }
//!     fn ghosts(&self) -> Vec<GhostSighting> { Vec::new() }
//! }
//!
//! let config = AgentConfig {
//!     noise: 0.0,
//!     direction_execution_probability: 1.0,
//!     ..AgentConfig::default()
//! };
//! let mut agent = MdpAgent::new(config).unwrap();
//!
//! // Both remaining moves close in on the food at (2, 2).
//! let direction = agent.decide(&Room);
//! assert!(direction == Direction::North || direction == Direction::East);
//! assert!(agent.last_metrics().converged);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `prowl-core` | Cells, directions, ids, the `GameState` seam |
//! | [`grid`] | `prowl-grid` | Maze topology and the legal-cell universe |
//! | [`sense`] | `prowl-sense` | Corridor visibility, hearing, observations |
//! | [`plan`] | `prowl-plan` | Reward maps, transition model, value iteration |
//! | [`agent`] | `prowl-agent` | Configuration and the per-tick decision loop |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the host seam (`prowl-core`).
///
/// Contains [`types::Cell`], [`types::Direction`], ghost sightings,
/// and the [`types::GameState`] trait game engines implement.
pub use prowl_core as types;

/// Maze topology (`prowl-grid`).
///
/// [`grid::Maze`] models a map's walls and derives the legal-cell
/// universe that reward maps and value tables are keyed over.
pub use prowl_grid as grid;

/// Sensing under partial observability (`prowl-sense`).
///
/// [`sense::SensorModel`] filters raw host state into per-tick
/// [`sense::Observation`]s through corridor visibility and a
/// wall-penetrating hearing radius.
pub use prowl_sense as sense;

/// Reward shaping and planning (`prowl-plan`).
///
/// [`plan::RewardMap`] painting, the [`plan::TransitionModel`] noise
/// model, and the [`plan::ValueIterationPlanner`] solver with its
/// greedy policy query.
pub use prowl_plan as plan;

/// The decision loop (`prowl-agent`).
///
/// [`agent::MdpAgent`] ties sensing, reward painting, planning, and
/// execution noise into one `decide` call per tick, configured by
/// [`agent::AgentConfig`].
pub use prowl_agent as agent;

/// Common imports for typical Prowl usage.
///
/// ```rust
/// use prowl::prelude::*;
/// ```
///
/// This imports the most frequently used types: the host seam, maze
/// and observation types, the planner, and the agent with its
/// configuration.
pub mod prelude {
    // Core types and the host seam
    pub use prowl_core::{Cell, Direction, GameState, GhostSighting, MazeInstanceId};

    // Maze topology
    pub use prowl_grid::{Maze, MazeError};

    // Sensing
    pub use prowl_sense::{GhostContact, Observation, SensorModel};

    // Planning
    pub use prowl_plan::{
        RewardMap, RewardProfile, Solution, SolveStats, TargetPolicy, TransitionModel,
        ValueFunction, ValueIterationPlanner,
    };

    // The decision loop
    pub use prowl_agent::{AgentConfig, ConfigError, DecisionMetrics, MdpAgent};
}
