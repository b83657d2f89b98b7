// src/motion/profile.rs - the immutable trajectory record
use serde::Serialize;

/// Number of kinematic phases in a jerk-limited profile.
pub const PHASE_COUNT: usize = 7;

/// Conversion between the external mm/min velocity unit and the mm/s used
/// for the internal kinematic math.
pub(crate) const SECS_PER_MIN: f64 = 60.0;

/// One of the seven ordered stages of a jerk-limited move.
///
/// The ordering is fixed and never reordered. A degenerate phase keeps its
/// slot with zero duration rather than being omitted, so indices stay
/// meaningful across all profile shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Acceleration ramps up linearly (jerk limited)
    AccelJerkUp = 0,
    /// Constant acceleration plateau
    AccelConst = 1,
    /// Acceleration ramps back down to zero
    AccelJerkDown = 2,
    /// Constant velocity
    Cruise = 3,
    /// Deceleration ramps up linearly
    DecelJerkUp = 4,
    /// Constant deceleration plateau
    DecelConst = 5,
    /// Deceleration ramps back down, meeting the exit velocity
    DecelJerkDown = 6,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::AccelJerkUp,
        Phase::AccelConst,
        Phase::AccelJerkDown,
        Phase::Cruise,
        Phase::DecelJerkUp,
        Phase::DecelConst,
        Phase::DecelJerkDown,
    ];

    /// Index into the per-phase arrays of a [`MotionProfile`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Classification of which sub-phases are present for a move's kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileShape {
    /// Cruise phase present along with constant accel/decel plateaus.
    Full,
    /// No cruise phase, but at least one constant-acceleration plateau.
    NoCruise,
    /// No plateau anywhere; the jerk ramps meet directly.
    Triangular,
    /// Cheap approximate shape used by the fast path for short moves.
    Reduced,
}

/// A fully synthesized jerk-limited trajectory for one linear move.
///
/// Constructed once by the planner, validated, then treated as immutable.
/// Plain `Copy` value with fixed-size arrays: publishing it to the
/// execution context is a single handoff and evaluation never allocates.
///
/// Units: distances mm, durations s, velocities mm/min (as supplied at the
/// planner boundary), acceleration mm/s², jerk mm/s³.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionProfile {
    /// Total distance of the move (mm)
    pub total_distance: f64,
    /// Velocity limit the profile was synthesized under (mm/min)
    pub max_velocity: f64,
    /// Acceleration limit (mm/s²)
    pub max_acceleration: f64,
    /// Jerk limit (mm/s³)
    pub max_jerk: f64,

    /// Duration of each phase (s)
    pub phase_duration: [f64; PHASE_COUNT],
    /// Distance covered in each phase (mm)
    pub phase_distance: [f64; PHASE_COUNT],
    /// Velocity at the end of each phase (mm/min)
    pub phase_end_velocity: [f64; PHASE_COUNT],

    /// Sum of all phase durations (s)
    pub total_time: f64,
    /// Peak/cruise velocity actually reached (mm/min)
    pub cruise_velocity: f64,
    /// Combined duration of phases 0-2 (s)
    pub accel_time: f64,
    /// Combined duration of phases 4-6 (s)
    pub decel_time: f64,

    /// Shape classification. Meaningless unless `valid`.
    pub shape: ProfileShape,
    /// True only if the profile passed distance-conservation validation.
    /// `false` means: do not execute this profile, fall back to trapezoidal.
    pub valid: bool,
}

impl MotionProfile {
    /// The zeroed profile meaning "do not use the S-curve for this move".
    pub fn invalid() -> Self {
        Self {
            total_distance: 0.0,
            max_velocity: 0.0,
            max_acceleration: 0.0,
            max_jerk: 0.0,
            phase_duration: [0.0; PHASE_COUNT],
            phase_distance: [0.0; PHASE_COUNT],
            phase_end_velocity: [0.0; PHASE_COUNT],
            total_time: 0.0,
            cruise_velocity: 0.0,
            accel_time: 0.0,
            decel_time: 0.0,
            shape: ProfileShape::Triangular,
            valid: false,
        }
    }

    /// Velocity (mm/min) at the start of the given phase index.
    ///
    /// Phase 0 starts at the move's entry velocity, which the profile does
    /// not store; every later phase starts where the previous one ended.
    pub fn phase_start_velocity(&self, index: usize, entry_velocity: f64) -> f64 {
        if index == 0 {
            entry_velocity
        } else {
            self.phase_end_velocity[index - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ordering_is_stable() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
        assert_eq!(Phase::Cruise.index(), 3);
        assert_eq!(Phase::DecelJerkDown.index(), 6);
    }

    #[test]
    fn test_invalid_profile_is_zeroed() {
        let profile = MotionProfile::invalid();
        assert!(!profile.valid);
        assert_eq!(profile.total_time, 0.0);
        assert_eq!(profile.total_distance, 0.0);
        assert!(profile.phase_duration.iter().all(|&t| t == 0.0));
        assert!(profile.phase_distance.iter().all(|&s| s == 0.0));
        assert!(profile.phase_end_velocity.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_phase_start_velocity_carries_entry() {
        let mut profile = MotionProfile::invalid();
        profile.phase_end_velocity[0] = 1200.0;
        assert_eq!(profile.phase_start_velocity(0, 600.0), 600.0);
        assert_eq!(profile.phase_start_velocity(1, 600.0), 1200.0);
    }
}
