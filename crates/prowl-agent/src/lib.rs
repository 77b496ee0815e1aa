//! The Prowl decision loop: sense, paint, plan, act.
//!
//! [`MdpAgent`] owns the whole per-tick pipeline. Each call to
//! [`decide`](MdpAgent::decide) reads the host state through the
//! [`GameState`](prowl_core::GameState) seam, filters it through the
//! sensor model, paints a fresh reward map, runs value iteration, and
//! returns exactly one direction with execution noise already applied.
//! The agent is purely reactive: it keeps a value table between ticks
//! as a warm start but carries no other memory of the past.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod metrics;

pub use agent::MdpAgent;
pub use config::{AgentConfig, ConfigError};
pub use metrics::DecisionMetrics;
