// src/lib.rs - Jerk-limited (S-curve) motion profile core
//! Computes and evaluates jerk-limited ("S-curve") motion profiles for single
//! linear moves, as an alternative to trapezoidal velocity ramps.
//!
//! The crate splits into two execution contexts:
//! - the planning context synthesizes a [`MotionProfile`] for a queued move
//!   ([`ScurvePlanner`], [`junction_velocity`], [`validate_axis_limits`]);
//! - the hard-real-time execution context queries the finished, immutable
//!   profile through the pure evaluators in [`motion::evaluator`].
//!
//! Units at the boundary: distances in mm, velocities in mm/min (converted to
//! mm/s internally), acceleration in mm/s², jerk in mm/s³, time in seconds.

pub mod config;
pub mod motion;

pub use config::{
    AxisLimits, LimitsError, RampMode, ScurveConfig, ScurveTuning, load_config,
    validate_axis_limits,
};
pub use motion::evaluator::{acceleration_at, position_at, velocity_at};
pub use motion::junction::junction_velocity;
pub use motion::profile::{MotionProfile, PHASE_COUNT, Phase, ProfileShape};
pub use motion::s_curve::{DISTANCE_TOLERANCE_MM, ScurvePlanner, should_use_s_curve};
