//! Sensing layer for the Prowl planning agent.
//!
//! Turns the host engine's raw world state into the per-tick
//! [`Observation`] the planner works from. Under partial visibility
//! the agent sees along corridors only: ahead up to a range limit,
//! sideways up to a shorter limit, with walls blocking the view, plus
//! a wall-penetrating hearing radius for ghosts. Under full visibility
//! the raw state passes through unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod observation;
pub mod sensor;

pub use observation::{GhostContact, Observation};
pub use sensor::SensorModel;
