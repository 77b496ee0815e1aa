//! Maze topology for the Prowl planning agent.
//!
//! [`Maze`] is the agent's immutable model of a map: dimensions, the
//! wall mask, and the derived legal-cell universe that every reward
//! map and value function is keyed over. A maze is built once per map
//! from the host engine's wall list and shared by the sensing and
//! planning layers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod maze;

pub use error::MazeError;
pub use maze::Maze;
