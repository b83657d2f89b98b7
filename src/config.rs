// src/config.rs - Axis limits, tuning thresholds, and the limits validator
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-axis kinematic limits a profile is synthesized under.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct AxisLimits {
    /// Maximum velocity (mm/min)
    #[serde(default = "default_max_velocity")]
    pub max_velocity: f64,

    /// Maximum acceleration (mm/s²)
    #[serde(default = "default_max_acceleration")]
    pub max_acceleration: f64,

    /// Maximum jerk (mm/s³). Zero disables jerk-limited planning for the axis.
    #[serde(default)]
    pub max_jerk: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self {
            max_velocity: default_max_velocity(),
            max_acceleration: default_max_acceleration(),
            max_jerk: 0.0,
        }
    }
}

/// Which ramp family the planner should use for an axis.
///
/// An explicit choice instead of threading the `max_jerk == 0` sentinel
/// through the profile arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampMode {
    /// Plain trapezoidal velocity ramps.
    Trapezoidal,
    /// Seven-phase jerk-limited ramps.
    JerkLimited,
}

impl AxisLimits {
    /// Ramp family implied by this axis configuration.
    pub fn ramp_mode(&self) -> RampMode {
        if self.max_jerk > 0.0 {
            RampMode::JerkLimited
        } else {
            RampMode::Trapezoidal
        }
    }
}

/// Tuning thresholds for the S-curve decision heuristics.
///
/// These are tuning constants without a derived physical justification; they
/// are kept as named, overridable configuration values rather than inlined
/// numbers.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ScurveTuning {
    /// Moves shorter than this may take the cheap reduced-shape path (mm).
    #[serde(default = "default_short_move_mm")]
    pub short_move_mm: f64,

    /// Entry/exit speed difference below which the reduced path applies (mm/min).
    #[serde(default = "default_speed_delta_mm_min")]
    pub speed_delta_mm_min: f64,

    /// Jerk ramp times below this are not perceptible; skip S-curve (s).
    #[serde(default = "default_min_ramp_time_s")]
    pub min_ramp_time_s: f64,

    /// Jerk ramp times above this smooth excessively; skip S-curve (s).
    #[serde(default = "default_max_ramp_time_s")]
    pub max_ramp_time_s: f64,

    /// Minimum move distance for S-curve, in units of `accel * ramp_time²`.
    #[serde(default = "default_min_distance_factor")]
    pub min_distance_factor: f64,
}

impl Default for ScurveTuning {
    fn default() -> Self {
        Self {
            short_move_mm: default_short_move_mm(),
            speed_delta_mm_min: default_speed_delta_mm_min(),
            min_ramp_time_s: default_min_ramp_time_s(),
            max_ramp_time_s: default_max_ramp_time_s(),
            min_distance_factor: default_min_distance_factor(),
        }
    }
}

/// Top-level configuration: one limits entry per axis plus shared tuning.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScurveConfig {
    #[serde(default)]
    pub axes: HashMap<String, AxisLimits>,

    #[serde(default)]
    pub tuning: ScurveTuning,
}

// Default value functions
fn default_max_velocity() -> f64 {
    3000.0
}
fn default_max_acceleration() -> f64 {
    500.0
}
fn default_short_move_mm() -> f64 {
    10.0
}
fn default_speed_delta_mm_min() -> f64 {
    120.0
}
fn default_min_ramp_time_s() -> f64 {
    0.005
}
fn default_max_ramp_time_s() -> f64 {
    0.5
}
fn default_min_distance_factor() -> f64 {
    4.0
}

/// Rejection reasons for an axis jerk/acceleration configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LimitsError {
    #[error("jerk cannot be negative")]
    NegativeJerk,

    #[error("jerk too small relative to acceleration: {max_jerk} < {max_acceleration}/10")]
    JerkTooSmall { max_jerk: f64, max_acceleration: f64 },

    #[error("jerk too large relative to acceleration: {max_jerk} > {max_acceleration}*100")]
    JerkTooLarge { max_jerk: f64, max_acceleration: f64 },

    #[error("ramp time {ramp_time:.3}s is too slow to reach full acceleration")]
    RampTooSlow { ramp_time: f64 },

    #[error("ramp time {ramp_time:.6}s is under 1 ms, not meaningfully smooth")]
    RampTooFast { ramp_time: f64 },
}

/// Check jerk/acceleration/velocity relationships for physical sanity.
///
/// `max_jerk == 0` is always accepted: it means jerk-limited planning is
/// disabled for the axis. First failing rule wins. The caller decides what to
/// do with a rejection; the usual policy is to fall back to trapezoidal ramps
/// for the offending axis and keep running.
pub fn validate_axis_limits(
    max_jerk: f64,
    max_acceleration: f64,
    _max_velocity: f64,
) -> Result<(), LimitsError> {
    if max_jerk < 0.0 {
        return Err(LimitsError::NegativeJerk);
    }
    if max_jerk == 0.0 {
        return Ok(());
    }
    if max_jerk < max_acceleration / 10.0 {
        return Err(LimitsError::JerkTooSmall {
            max_jerk,
            max_acceleration,
        });
    }
    if max_jerk > max_acceleration * 100.0 {
        return Err(LimitsError::JerkTooLarge {
            max_jerk,
            max_acceleration,
        });
    }
    let ramp_time = max_acceleration / max_jerk;
    if ramp_time > 1.0 {
        return Err(LimitsError::RampTooSlow { ramp_time });
    }
    if ramp_time < 0.001 {
        return Err(LimitsError::RampTooFast { ramp_time });
    }
    Ok(())
}

/// Load an axis configuration from a TOML file.
///
/// Axes that fail [`validate_axis_limits`] are not fatal: jerk-limited
/// planning is disabled for them (jerk set to zero) and a warning is logged.
pub fn load_config(path: &str) -> Result<ScurveConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let mut config: ScurveConfig = toml::from_str(&contents)?;

    for (name, axis) in config.axes.iter_mut() {
        if let Err(e) =
            validate_axis_limits(axis.max_jerk, axis.max_acceleration, axis.max_velocity)
        {
            tracing::warn!("axis '{}': {}; disabling jerk-limited planning", name, e);
            axis.max_jerk = 0.0;
        }
    }

    tracing::info!("loaded {} axis definitions from {}", config.axes.len(), path);
    Ok(config)
}
