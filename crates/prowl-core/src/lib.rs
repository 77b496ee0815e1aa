//! Core types and traits for the Prowl planning agent.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared across the Prowl workspace: grid cells,
//! movement directions, ghost sightings, instance IDs, and the
//! [`GameState`] trait through which a host game engine exposes the
//! world to the agent.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod id;
pub mod state;

pub use cell::Cell;
pub use direction::Direction;
pub use id::MazeInstanceId;
pub use state::{GameState, GhostSighting};
