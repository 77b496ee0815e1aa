//! Agent configuration, validation, and error types.
//!
//! [`AgentConfig`] is the single flat knob set for constructing an
//! [`MdpAgent`](crate::MdpAgent); [`validate()`](AgentConfig::validate)
//! checks every invariant up front so a bad value fails at
//! construction instead of mid-game.

use std::error::Error;
use std::fmt;

use prowl_plan::{RewardProfile, TargetPolicy};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`AgentConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A reward constant is NaN or infinite.
    NonFiniteReward {
        /// Which field held the bad value.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// Discount factor outside `[0, 1)`.
    InvalidDiscount {
        /// The invalid value.
        value: f64,
    },
    /// Movement noise outside `[0, 1]`.
    InvalidNoise {
        /// The invalid value.
        value: f64,
    },
    /// Sweep cap of zero would forbid planning entirely.
    ZeroIterationBudget,
    /// Convergence tolerance is NaN, infinite, zero, or negative.
    InvalidTheta {
        /// The invalid value.
        value: f64,
    },
    /// Execution probability outside `[0, 1]`.
    InvalidExecutionProbability {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteReward { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::InvalidDiscount { value } => {
                write!(f, "discount must be in [0, 1), got {value}")
            }
            Self::InvalidNoise { value } => {
                write!(f, "noise must be in [0, 1], got {value}")
            }
            Self::ZeroIterationBudget => {
                write!(f, "max_iterations must be at least 1")
            }
            Self::InvalidTheta { value } => {
                write!(f, "theta must be finite and positive, got {value}")
            }
            Self::InvalidExecutionProbability { value } => {
                write!(
                    f,
                    "direction_execution_probability must be in [0, 1], got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

// ── AgentConfig ────────────────────────────────────────────────────

/// Complete configuration for an [`MdpAgent`](crate::MdpAgent).
///
/// All fields are plain values so configs can be built with struct
/// update syntax from [`Default`]. Defaults reproduce the classic
/// arcade tuning: mildly costly wandering, lethal ghosts, and a short
/// planning horizon.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    /// Reward on each food cell. Default: 10.
    pub food_reward: f64,
    /// Reward on each capsule cell. Default: 50.
    pub capsule_reward: f64,
    /// Reward on each cell holding a sensed ghost. Default: -500.
    pub ghost_reward: f64,
    /// Reward inside a nearby ghost's danger ball. Default: -250.
    pub danger_zone_reward: f64,
    /// Reward on every remaining legal cell. Default: -0.04.
    pub blank_reward: f64,
    /// Reward attributed to wall cells in host configs. Walls never
    /// enter the legal universe, so the value is validated but never
    /// painted. Default: 0.
    pub wall_reward: f64,
    /// Discount factor for value iteration, in `[0, 1)`. Default: 0.6.
    pub discount: f64,
    /// Probability an intended move slips perpendicular during
    /// planning, in `[0, 1]`. Default: 0.2.
    pub noise: f64,
    /// Sweep cap per solve. Hitting it is not an error. Default: 500.
    pub max_iterations: u32,
    /// Convergence tolerance on the largest per-cell change.
    /// Default: 1e-3.
    pub theta: f64,
    /// Manhattan radius of ghost danger balls, and the agent-to-ghost
    /// distance that activates them. Default: 1.
    pub safety_distance: u32,
    /// Whether sensing is corridor-limited. Default: false.
    pub partial_visibility: bool,
    /// Forward view range in cells. Default: 5.
    pub visibility_limit: u32,
    /// Sideways view range in cells. Default: 1.
    pub side_limit: u32,
    /// Manhattan hearing radius for ghosts. Default: 2.
    pub hearing_limit: u32,
    /// Probability the drawn move matches the planned one, in
    /// `[0, 1]`. Default: 0.8.
    pub direction_execution_probability: f64,
    /// What the agent steers towards. Default: [`TargetPolicy::Food`].
    pub target_policy: TargetPolicy,
    /// Seed for the per-tick execution-noise stream. Default: 0.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            food_reward: 10.0,
            capsule_reward: 50.0,
            ghost_reward: -500.0,
            danger_zone_reward: -250.0,
            blank_reward: -0.04,
            wall_reward: 0.0,
            discount: 0.6,
            noise: 0.2,
            max_iterations: 500,
            theta: 1e-3,
            safety_distance: 1,
            partial_visibility: false,
            visibility_limit: 5,
            side_limit: 1,
            hearing_limit: 2,
            direction_execution_probability: 0.8,
            target_policy: TargetPolicy::Food,
            seed: 0,
        }
    }
}

impl AgentConfig {
    /// Validate every invariant.
    ///
    /// Checks are ordered roughly by how the fields are consumed:
    /// rewards, then planning parameters, then execution.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Every reward constant must be a real number.
        let rewards = [
            ("food_reward", self.food_reward),
            ("capsule_reward", self.capsule_reward),
            ("ghost_reward", self.ghost_reward),
            ("danger_zone_reward", self.danger_zone_reward),
            ("blank_reward", self.blank_reward),
            ("wall_reward", self.wall_reward),
        ];
        for (name, value) in rewards {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteReward { name, value });
            }
        }
        // 2. Discount strictly below one keeps values bounded.
        if !self.discount.is_finite() || self.discount < 0.0 || self.discount >= 1.0 {
            return Err(ConfigError::InvalidDiscount {
                value: self.discount,
            });
        }
        // 3. Noise is a probability.
        if !self.noise.is_finite() || self.noise < 0.0 || self.noise > 1.0 {
            return Err(ConfigError::InvalidNoise { value: self.noise });
        }
        // 4. At least one sweep must be allowed.
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        // 5. Theta must be positive; zero would spin every solve to
        //    the sweep cap.
        if !self.theta.is_finite() || self.theta <= 0.0 {
            return Err(ConfigError::InvalidTheta { value: self.theta });
        }
        // 6. Execution probability is a probability.
        if !self.direction_execution_probability.is_finite()
            || self.direction_execution_probability < 0.0
            || self.direction_execution_probability > 1.0
        {
            return Err(ConfigError::InvalidExecutionProbability {
                value: self.direction_execution_probability,
            });
        }
        Ok(())
    }

    /// The reward constants as a paintable [`RewardProfile`].
    pub fn reward_profile(&self) -> RewardProfile {
        RewardProfile {
            food: self.food_reward,
            capsule: self.capsule_reward,
            ghost: self.ghost_reward,
            danger_zone: self.danger_zone_reward,
            blank: self.blank_reward,
            safety_distance: self.safety_distance,
            policy: self.target_policy,
        }
    }
}
