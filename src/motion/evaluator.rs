// src/motion/evaluator.rs - real-time profile evaluation
//
// These three functions run inside the step-pulse interrupt context. They are
// pure over (profile, elapsed time), scan at most seven phases, and contain no
// allocation, recursion, or logging. Error handling is resolved into defined
// fallback values: an invalid profile evaluates as "not moving" rather than
// propagating anything the tick handler would have to branch on.
use crate::motion::profile::{MotionProfile, PHASE_COUNT, ProfileShape, SECS_PER_MIN};

/// Instantaneous acceleration (mm/s²) at `elapsed` seconds into the move.
///
/// Returns 0 for an invalid profile, outside the profile's duration, and for
/// reduced-shape profiles (which model the move as constant velocity).
pub fn acceleration_at(profile: &MotionProfile, elapsed: f64) -> f64 {
    if !profile.valid || elapsed < 0.0 || elapsed > profile.total_time {
        return 0.0;
    }
    if profile.shape == ProfileShape::Reduced {
        return 0.0;
    }

    let jerk = profile.max_jerk;
    // Peak acceleration reached by each side: the jerk ramp duration times
    // the jerk. Equals max_acceleration unless the side is plateau-free.
    let accel_peak = jerk * profile.phase_duration[0];
    let decel_peak = jerk * profile.phase_duration[4];

    let mut phase_start = 0.0;
    for index in 0..PHASE_COUNT {
        let duration = profile.phase_duration[index];
        if duration > 0.0 && elapsed <= phase_start + duration {
            let dt = elapsed - phase_start;
            return match index {
                0 => jerk * dt,
                1 => profile.max_acceleration,
                2 => accel_peak - jerk * dt,
                3 => 0.0,
                4 => -jerk * dt,
                5 => -profile.max_acceleration,
                _ => -(decel_peak - jerk * dt),
            };
        }
        phase_start += duration;
    }
    0.0
}

/// Instantaneous velocity (mm/min) at `elapsed` seconds into the move.
///
/// Integrates analytically within the current phase only, seeded from the
/// profile's precomputed end velocity of the previous phase; earlier phases
/// are never re-integrated. Callers normally query with monotonically
/// increasing time, but any single query is answered exactly.
///
/// An invalid profile evaluates to a frozen `entry_velocity`; time beyond the
/// profile freezes at the exit velocity.
pub fn velocity_at(profile: &MotionProfile, elapsed: f64, entry_velocity: f64) -> f64 {
    if !profile.valid {
        return entry_velocity;
    }
    if elapsed <= 0.0 {
        return entry_velocity;
    }
    if elapsed >= profile.total_time {
        return profile.phase_end_velocity[PHASE_COUNT - 1];
    }
    if profile.shape == ProfileShape::Reduced {
        return profile.cruise_velocity;
    }

    let jerk = profile.max_jerk;
    let accel = profile.max_acceleration;
    let accel_peak = jerk * profile.phase_duration[0];
    let decel_peak = jerk * profile.phase_duration[4];

    let mut phase_start = 0.0;
    for index in 0..PHASE_COUNT {
        let duration = profile.phase_duration[index];
        if duration > 0.0 && elapsed <= phase_start + duration {
            let dt = elapsed - phase_start;
            let v0 = profile.phase_start_velocity(index, entry_velocity) / SECS_PER_MIN;
            let v = match index {
                0 => v0 + 0.5 * jerk * dt * dt,
                1 => v0 + accel * dt,
                2 => v0 + accel_peak * dt - 0.5 * jerk * dt * dt,
                3 => v0,
                4 => v0 - 0.5 * jerk * dt * dt,
                5 => v0 - accel * dt,
                _ => v0 - decel_peak * dt + 0.5 * jerk * dt * dt,
            };
            return v * SECS_PER_MIN;
        }
        phase_start += duration;
    }
    profile.phase_end_velocity[PHASE_COUNT - 1]
}

/// Position (mm) along the move at `elapsed` seconds.
///
/// Sums the precomputed distances of completed phases, then adds the active
/// phase's analytic displacement. Exact within the active phase, not a
/// midpoint approximation.
///
/// An invalid profile evaluates to 0; time beyond the profile freezes at the
/// total distance.
pub fn position_at(profile: &MotionProfile, elapsed: f64, entry_velocity: f64) -> f64 {
    if !profile.valid || elapsed <= 0.0 {
        return 0.0;
    }
    if elapsed >= profile.total_time {
        return profile.total_distance;
    }

    let jerk = profile.max_jerk;
    let accel = profile.max_acceleration;
    let accel_peak = jerk * profile.phase_duration[0];
    let decel_peak = jerk * profile.phase_duration[4];

    let mut phase_start = 0.0;
    let mut traveled = 0.0;
    for index in 0..PHASE_COUNT {
        let duration = profile.phase_duration[index];
        if duration > 0.0 && elapsed <= phase_start + duration {
            let dt = elapsed - phase_start;
            if profile.shape == ProfileShape::Reduced {
                return traveled + profile.phase_distance[index] * (dt / duration);
            }
            let v0 = profile.phase_start_velocity(index, entry_velocity) / SECS_PER_MIN;
            let partial = match index {
                0 => v0 * dt + jerk * dt * dt * dt / 6.0,
                1 => v0 * dt + 0.5 * accel * dt * dt,
                2 => v0 * dt + 0.5 * accel_peak * dt * dt - jerk * dt * dt * dt / 6.0,
                3 => v0 * dt,
                4 => v0 * dt - jerk * dt * dt * dt / 6.0,
                5 => v0 * dt - 0.5 * accel * dt * dt,
                _ => v0 * dt - 0.5 * decel_peak * dt * dt + jerk * dt * dt * dt / 6.0,
            };
            return traveled + partial;
        }
        phase_start += duration;
        traveled += profile.phase_distance[index];
    }
    profile.total_distance
}
