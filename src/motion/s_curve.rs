// src/motion/s_curve.rs - jerk-limited profile synthesis
//
// The planner-side half of the crate: given one move's distance and boundary
// velocities, derive the seven phase durations/distances/velocities under the
// axis limits. Runs in the planning context; may log and iterate (bounded).
use crate::config::{AxisLimits, ScurveTuning};
use crate::motion::math::solve_quadratic;
use crate::motion::profile::{MotionProfile, PHASE_COUNT, ProfileShape, SECS_PER_MIN};

/// Distance-conservation tolerance for a synthesized profile (mm).
///
/// The final safety net against accumulated floating-point or
/// shape-selection error: a profile whose phase distances do not add back up
/// to the requested distance within this bound is discarded.
pub const DISTANCE_TOLERANCE_MM: f64 = 0.1;

/// Cruise durations below this classify as `NoCruise` rather than `Full` (s).
const CRUISE_TIME_EPS: f64 = 1e-6;

/// Plateau durations below this count as "no constant-acceleration plateau".
const PLATEAU_TIME_EPS: f64 = 1e-9;

/// Fixed iteration count for the peak-velocity bisection. Bounded by design:
/// the planning context has a time budget too.
const PEAK_FIT_DEPTH: usize = 64;

/// Time-share weights of the reduced shape, one entry per phase.
///
/// Front-loaded toward the acceleration and cruise phases, consistent with a
/// symmetric triangular approximation. Must sum to 1.
pub const REDUCED_TIME_WEIGHTS: [f64; PHASE_COUNT] = [0.20, 0.14, 0.16, 0.10, 0.14, 0.12, 0.14];

/// One side (acceleration or deceleration) of a profile, in mm/s units.
///
/// A side whose velocity change is at least `accel²/jerk` keeps a
/// constant-acceleration plateau between its two jerk ramps; a smaller change
/// shortens the ramps instead and never reaches the acceleration limit.
#[derive(Debug, Clone, Copy)]
struct RampSide {
    /// Duration of each of the side's two jerk phases (s)
    jerk_time: f64,
    /// Duration of the constant-acceleration plateau (s), zero if absent
    plateau_time: f64,
}

impl RampSide {
    /// Ramp between two velocities (mm/s, `v_hi >= v_lo`) under the limits.
    fn between(v_lo: f64, v_hi: f64, accel: f64, jerk: f64) -> Self {
        let dv = (v_hi - v_lo).max(0.0);
        let full_ramp = accel / jerk;
        if dv >= accel * full_ramp {
            RampSide {
                jerk_time: full_ramp,
                plateau_time: dv / accel - full_ramp,
            }
        } else {
            RampSide {
                jerk_time: (dv / jerk).sqrt(),
                plateau_time: 0.0,
            }
        }
    }

    fn total_time(&self) -> f64 {
        2.0 * self.jerk_time + self.plateau_time
    }

    fn has_plateau(&self) -> bool {
        self.plateau_time > PLATEAU_TIME_EPS
    }

    /// Exact distance covered ramping between `v_lo` and `v_hi` (mm).
    ///
    /// The jerk-limited velocity curve is antisymmetric about the side's
    /// midpoint, so the closed-form integral collapses to the mean velocity
    /// times the side duration. Holds for both the plateau and plateau-free
    /// forms.
    fn distance(&self, v_lo: f64, v_hi: f64) -> f64 {
        0.5 * (v_lo + v_hi) * self.total_time()
    }
}

/// Distance consumed by both ramps of a move peaking at `v_peak` (mm/s).
fn two_sided_distance(v_entry: f64, v_exit: f64, v_peak: f64, accel: f64, jerk: f64) -> f64 {
    let acc = RampSide::between(v_entry, v_peak, accel, jerk);
    let dec = RampSide::between(v_exit, v_peak, accel, jerk);
    acc.distance(v_entry, v_peak) + dec.distance(v_exit, v_peak)
}

/// Decide whether jerk-limited synthesis is worth its cost for a move.
///
/// Pure gate the planner consults before paying for [`ScurvePlanner::compute_profile`]:
/// the jerk ramp must be long enough to be perceptible, short enough not to
/// smooth the whole move away, and the move must leave the jerk phases room
/// to matter.
pub fn should_use_s_curve(
    distance: f64,
    max_jerk: f64,
    max_acceleration: f64,
    tuning: &ScurveTuning,
) -> bool {
    if max_jerk <= 0.0 || max_acceleration <= 0.0 {
        return false;
    }
    let ramp_time = max_acceleration / max_jerk;
    if ramp_time < tuning.min_ramp_time_s || ramp_time > tuning.max_ramp_time_s {
        return false;
    }
    distance >= tuning.min_distance_factor * max_acceleration * ramp_time * ramp_time
}

/// Jerk-limited profile synthesizer for one axis.
///
/// Holds the axis limits and the tuning thresholds; each call to
/// [`compute_profile`](Self::compute_profile) is a pure function of its
/// arguments and those limits.
#[derive(Debug, Clone, Copy)]
pub struct ScurvePlanner {
    limits: AxisLimits,
    tuning: ScurveTuning,
}

impl ScurvePlanner {
    pub fn new(limits: AxisLimits, tuning: ScurveTuning) -> Self {
        Self { limits, tuning }
    }

    pub fn limits(&self) -> &AxisLimits {
        &self.limits
    }

    pub fn tuning(&self) -> &ScurveTuning {
        &self.tuning
    }

    /// [`should_use_s_curve`] against this planner's limits and tuning.
    pub fn should_use_s_curve(&self, distance: f64) -> bool {
        should_use_s_curve(
            distance,
            self.limits.max_jerk,
            self.limits.max_acceleration,
            &self.tuning,
        )
    }

    /// Synthesize the full seven-phase profile for one linear move.
    ///
    /// # Arguments
    /// * `distance` - total move distance (mm, > 0)
    /// * `entry_velocity` - velocity at move start (mm/min)
    /// * `exit_velocity` - velocity at move end (mm/min)
    ///
    /// Returns a zeroed `valid = false` profile for degenerate inputs or when
    /// the requested boundary velocities cannot be honored within the
    /// distance; the caller then falls back to a trapezoidal ramp. Never
    /// panics and never allocates.
    pub fn compute_profile(
        &self,
        distance: f64,
        entry_velocity: f64,
        exit_velocity: f64,
    ) -> MotionProfile {
        let accel = self.limits.max_acceleration;
        let jerk = self.limits.max_jerk;
        let max_velocity = self.limits.max_velocity;

        let finite = distance.is_finite()
            && entry_velocity.is_finite()
            && exit_velocity.is_finite()
            && max_velocity.is_finite()
            && accel.is_finite()
            && jerk.is_finite();
        if !finite || distance <= 0.0 || accel <= 0.0 || jerk <= 0.0 || max_velocity <= 0.0 {
            tracing::debug!(
                distance,
                accel,
                jerk,
                "degenerate inputs, refusing jerk-limited profile"
            );
            return MotionProfile::invalid();
        }

        // Internal math is mm/s
        let v_entry = (entry_velocity / SECS_PER_MIN).max(0.0);
        let v_exit = (exit_velocity / SECS_PER_MIN).max(0.0);
        let floor = v_entry.max(v_exit);
        let v_cap = (max_velocity / SECS_PER_MIN).max(floor);

        let needed_at_cap = two_sided_distance(v_entry, v_exit, v_cap, accel, jerk);
        let (v_peak, cruise_distance) = if needed_at_cap <= distance {
            (v_cap, distance - needed_at_cap)
        } else {
            // Distance-limited: no room to reach the velocity limit. If even
            // ramping straight between entry and exit overshoots the distance,
            // the move is infeasible for this profile family.
            let needed_at_floor = two_sided_distance(v_entry, v_exit, floor, accel, jerk);
            if needed_at_floor > distance + DISTANCE_TOLERANCE_MM {
                tracing::debug!(
                    distance,
                    needed_at_floor,
                    "boundary velocities cannot be honored within the distance"
                );
                return MotionProfile::invalid();
            }
            let fitted = fit_peak_velocity(distance, v_entry, v_exit, floor, v_cap, accel, jerk);
            (fitted, 0.0)
        };

        let profile = build_profile(
            &self.limits,
            distance,
            v_entry,
            v_exit,
            v_peak,
            cruise_distance,
        );
        if profile.valid {
            tracing::debug!(
                shape = ?profile.shape,
                total_time = profile.total_time,
                cruise_velocity = profile.cruise_velocity,
                "synthesized jerk-limited profile"
            );
        }
        profile
    }

    /// Cheap approximate synthesis for short moves with near-equal boundary
    /// velocities.
    ///
    /// Apportions total move time across the seven phases by
    /// [`REDUCED_TIME_WEIGHTS`] and distributes distance proportionally to
    /// time share, which gives every phase the same average velocity. Trades
    /// phase-boundary kinematic exactness for O(1) computation; distance and
    /// duration bookkeeping still hold exactly. Inputs outside the
    /// short/near-equal envelope delegate to [`compute_profile`](Self::compute_profile)
    /// because the approximation error grows with move length and velocity
    /// delta.
    pub fn compute_profile_fast(
        &self,
        distance: f64,
        entry_velocity: f64,
        exit_velocity: f64,
    ) -> MotionProfile {
        let accel = self.limits.max_acceleration;
        let jerk = self.limits.max_jerk;

        let finite =
            distance.is_finite() && entry_velocity.is_finite() && exit_velocity.is_finite();
        if !finite || distance <= 0.0 || accel <= 0.0 || jerk <= 0.0 {
            return MotionProfile::invalid();
        }

        let short = distance < self.tuning.short_move_mm;
        let near_equal =
            (entry_velocity - exit_velocity).abs() < self.tuning.speed_delta_mm_min;
        if !(short && near_equal) {
            tracing::debug!(
                distance,
                entry_velocity,
                exit_velocity,
                "outside the reduced-shape envelope, delegating to full synthesis"
            );
            return self.compute_profile(distance, entry_velocity, exit_velocity);
        }

        let v_entry = (entry_velocity / SECS_PER_MIN).max(0.0);
        let v_exit = (exit_velocity / SECS_PER_MIN).max(0.0);
        let mut v_avg = 0.5 * (v_entry + v_exit);
        if v_avg <= f64::EPSILON {
            // From/to standstill: symmetric triangular estimate, capped by
            // the axis velocity limit.
            v_avg = 0.5 * (self.limits.max_velocity / SECS_PER_MIN).min((distance * accel).sqrt());
        }
        if v_avg <= 0.0 {
            return MotionProfile::invalid();
        }
        let total_time = distance / v_avg;

        let mut profile = MotionProfile::invalid();
        profile.total_distance = distance;
        profile.max_velocity = self.limits.max_velocity;
        profile.max_acceleration = accel;
        profile.max_jerk = jerk;
        for i in 0..PHASE_COUNT {
            profile.phase_duration[i] = REDUCED_TIME_WEIGHTS[i] * total_time;
            profile.phase_distance[i] = REDUCED_TIME_WEIGHTS[i] * distance;
            profile.phase_end_velocity[i] = v_avg * SECS_PER_MIN;
        }
        profile.phase_end_velocity[PHASE_COUNT - 1] = exit_velocity.max(0.0);
        profile.total_time = total_time;
        profile.cruise_velocity = v_avg * SECS_PER_MIN;
        profile.accel_time = profile.phase_duration[0]
            + profile.phase_duration[1]
            + profile.phase_duration[2];
        profile.decel_time = profile.phase_duration[4]
            + profile.phase_duration[5]
            + profile.phase_duration[6];
        profile.shape = ProfileShape::Reduced;

        // Conservation holds by construction, but the gate is never skipped.
        let total: f64 = profile.phase_distance.iter().sum();
        if (total - distance).abs() > DISTANCE_TOLERANCE_MM {
            tracing::warn!(total, distance, "reduced profile failed conservation");
            return MotionProfile::invalid();
        }
        profile.valid = true;
        profile
    }
}

/// Fit the peak velocity (mm/s) of a distance-limited move by fixed-depth
/// bisection of the exact two-sided distance function over `[lo, hi]`.
///
/// A closed-form quadratic solves the case where both sides keep their
/// constant-acceleration plateau; when its root lands where a plateau
/// vanishes the bisection takes over. Caller guarantees the distance lies
/// between the boundary values of the interval.
fn fit_peak_velocity(
    distance: f64,
    v_entry: f64,
    v_exit: f64,
    lo: f64,
    hi: f64,
    accel: f64,
    jerk: f64,
) -> f64 {
    // Plateau-form distance, expanded:
    //   d = (v² - v_entry²)/(2a) + Tj(v_entry + v)/2
    //     + (v² - v_exit²)/(2a)  + Tj(v + v_exit)/2
    // which is quadratic in the peak velocity v.
    let ramp_time = accel / jerk;
    let c = ramp_time * (v_entry + v_exit) / 2.0
        - (v_entry * v_entry + v_exit * v_exit) / (2.0 * accel)
        - distance;
    if let Some((root, _)) = solve_quadratic(1.0 / accel, ramp_time, c) {
        let plateau_speed = accel * ramp_time;
        if root >= lo
            && root <= hi
            && root - v_entry >= plateau_speed
            && root - v_exit >= plateau_speed
        {
            return root;
        }
    }

    let mut lo = lo;
    let mut hi = hi;
    for _ in 0..PEAK_FIT_DEPTH {
        let mid = 0.5 * (lo + hi);
        if two_sided_distance(v_entry, v_exit, mid, accel, jerk) > distance {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}

/// Populate all seven phases from the chosen peak velocity and validate.
///
/// Phases 4-6 mirror phases 2-0: deceleration is the time-reverse of
/// acceleration, ending at the exit velocity. All velocities here are mm/s;
/// the stored profile converts back to mm/min.
fn build_profile(
    limits: &AxisLimits,
    distance: f64,
    v_entry: f64,
    v_exit: f64,
    v_peak: f64,
    cruise_distance: f64,
) -> MotionProfile {
    let accel = limits.max_acceleration;
    let jerk = limits.max_jerk;

    let acc = RampSide::between(v_entry, v_peak, accel, jerk);
    let dec = RampSide::between(v_exit, v_peak, accel, jerk);

    // Peak acceleration actually reached by each side; equals the accel
    // limit whenever the side keeps its plateau.
    let a_acc = jerk * acc.jerk_time;
    let a_dec = jerk * dec.jerk_time;

    let mut t = [0.0_f64; PHASE_COUNT];
    let mut s = [0.0_f64; PHASE_COUNT];
    let mut v = [0.0_f64; PHASE_COUNT];

    // Acceleration side: jerk up, plateau, jerk down
    t[0] = acc.jerk_time;
    s[0] = v_entry * t[0] + jerk * t[0] * t[0] * t[0] / 6.0;
    v[0] = v_entry + 0.5 * jerk * t[0] * t[0];

    t[1] = acc.plateau_time;
    s[1] = v[0] * t[1] + 0.5 * accel * t[1] * t[1];
    v[1] = v[0] + accel * t[1];

    t[2] = acc.jerk_time;
    s[2] = v[1] * t[2] + 0.5 * a_acc * t[2] * t[2] - jerk * t[2] * t[2] * t[2] / 6.0;
    v[2] = v[1] + a_acc * t[2] - 0.5 * jerk * t[2] * t[2];

    // Cruise
    t[3] = if cruise_distance > 0.0 && v_peak > 0.0 {
        cruise_distance / v_peak
    } else {
        0.0
    };
    s[3] = cruise_distance.max(0.0);
    v[3] = v[2];

    // Deceleration side mirrors the acceleration side in time-reverse
    t[4] = dec.jerk_time;
    s[4] = v[3] * t[4] - jerk * t[4] * t[4] * t[4] / 6.0;
    v[4] = v[3] - 0.5 * jerk * t[4] * t[4];

    t[5] = dec.plateau_time;
    s[5] = v[4] * t[5] - 0.5 * accel * t[5] * t[5];
    v[5] = v[4] - accel * t[5];

    t[6] = dec.jerk_time;
    s[6] = v[5] * t[6] - 0.5 * a_dec * t[6] * t[6] + jerk * t[6] * t[6] * t[6] / 6.0;
    v[6] = v[5] - a_dec * t[6] + 0.5 * jerk * t[6] * t[6];

    // Validation gate: the phase distances must add back up to the request.
    let total_distance: f64 = s.iter().sum();
    if (total_distance - distance).abs() > DISTANCE_TOLERANCE_MM {
        tracing::warn!(
            requested = distance,
            computed = total_distance,
            "distance conservation failed, discarding jerk-limited profile"
        );
        return MotionProfile::invalid();
    }

    let shape = if t[3] > CRUISE_TIME_EPS {
        ProfileShape::Full
    } else if acc.has_plateau() || dec.has_plateau() {
        ProfileShape::NoCruise
    } else {
        ProfileShape::Triangular
    };

    MotionProfile {
        total_distance: distance,
        max_velocity: limits.max_velocity,
        max_acceleration: accel,
        max_jerk: jerk,
        phase_duration: t,
        phase_distance: s,
        phase_end_velocity: [
            v[0] * SECS_PER_MIN,
            v[1] * SECS_PER_MIN,
            v[2] * SECS_PER_MIN,
            v[3] * SECS_PER_MIN,
            v[4] * SECS_PER_MIN,
            v[5] * SECS_PER_MIN,
            v[6] * SECS_PER_MIN,
        ],
        total_time: t.iter().sum(),
        cruise_velocity: v_peak * SECS_PER_MIN,
        accel_time: t[0] + t[1] + t[2],
        decel_time: t[4] + t[5] + t[6],
        shape,
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn test_planner() -> ScurvePlanner {
        ScurvePlanner::new(
            AxisLimits {
                max_velocity: 3000.0,
                max_acceleration: 500.0,
                max_jerk: 5000.0,
            },
            ScurveTuning::default(),
        )
    }

    fn assert_conserved(profile: &MotionProfile) {
        let total: f64 = profile.phase_distance.iter().sum();
        assert!(
            (total - profile.total_distance).abs() <= DISTANCE_TOLERANCE_MM,
            "distance not conserved: {} vs {}",
            total,
            profile.total_distance
        );
        let time: f64 = profile.phase_duration.iter().sum();
        assert!((time - profile.total_time).abs() < 1e-4);
        assert!(profile.phase_duration.iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn test_full_profile_100mm_from_rest() {
        let profile = test_planner().compute_profile(100.0, 0.0, 0.0);
        assert!(profile.valid);
        assert!(matches!(
            profile.shape,
            ProfileShape::Full | ProfileShape::NoCruise
        ));
        assert_conserved(&profile);
        // Cruise velocity reaches but never exceeds the axis limit
        assert!(profile.phase_end_velocity[3] <= 3000.0 + TOL);
        assert!((profile.phase_end_velocity[3] - 3000.0).abs() < 1.0);
        // Terminal velocity matches the requested exit
        assert!(profile.phase_end_velocity[6].abs() < TOL);
        // 50 mm/s peak with 0.1 s ramps: 0.2 s per side, 5 mm per side
        assert!((profile.accel_time - 0.2).abs() < 1e-9);
        assert!((profile.decel_time - 0.2).abs() < 1e-9);
        assert!((profile.phase_distance[3] - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_short_move_degrades_to_triangular() {
        let profile = test_planner().compute_profile(2.0, 0.0, 0.0);
        assert!(profile.valid);
        assert_eq!(profile.shape, ProfileShape::Triangular);
        assert_conserved(&profile);
        // No plateau anywhere
        assert!(profile.phase_duration[1] < 1e-9);
        assert!(profile.phase_duration[5] < 1e-9);
        // Peak stays well under the velocity limit
        assert!(profile.cruise_velocity < 3000.0);
        assert!(profile.phase_end_velocity[6].abs() < TOL);
    }

    #[test]
    fn test_asymmetric_boundary_velocities() {
        let profile = test_planner().compute_profile(50.0, 600.0, 1200.0);
        assert!(profile.valid);
        assert_conserved(&profile);
        assert!((profile.phase_end_velocity[6] - 1200.0).abs() < 1e-6);
        // Velocities rise through the acceleration side...
        for i in 1..4 {
            assert!(profile.phase_end_velocity[i] >= profile.phase_end_velocity[i - 1] - TOL);
        }
        // ...and fall through the deceleration side
        for i in 4..7 {
            assert!(profile.phase_end_velocity[i] <= profile.phase_end_velocity[i - 1] + TOL);
        }
    }

    #[test]
    fn test_pure_cruise_when_already_at_speed() {
        let profile = test_planner().compute_profile(60.0, 3000.0, 3000.0);
        assert!(profile.valid);
        assert_eq!(profile.shape, ProfileShape::Full);
        assert_conserved(&profile);
        // Both ramps degenerate; the whole move is the cruise phase
        assert!(profile.accel_time < 1e-9);
        assert!(profile.decel_time < 1e-9);
        assert!((profile.phase_distance[3] - 60.0).abs() < 1e-9);
        assert!((profile.total_time - 60.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_infeasible_speed_change_rejected() {
        // 3000 mm/min cannot be shed within half a millimeter
        let profile = test_planner().compute_profile(0.5, 3000.0, 0.0);
        assert!(!profile.valid);
        assert_eq!(profile.total_time, 0.0);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let planner = test_planner();
        assert!(!planner.compute_profile(0.0, 0.0, 0.0).valid);
        assert!(!planner.compute_profile(-5.0, 0.0, 0.0).valid);
        assert!(!planner.compute_profile(f64::NAN, 0.0, 0.0).valid);

        let no_jerk = ScurvePlanner::new(
            AxisLimits {
                max_velocity: 3000.0,
                max_acceleration: 500.0,
                max_jerk: 0.0,
            },
            ScurveTuning::default(),
        );
        assert!(!no_jerk.compute_profile(100.0, 0.0, 0.0).valid);

        let no_accel = ScurvePlanner::new(
            AxisLimits {
                max_velocity: 3000.0,
                max_acceleration: 0.0,
                max_jerk: 5000.0,
            },
            ScurveTuning::default(),
        );
        assert!(!no_accel.compute_profile(100.0, 0.0, 0.0).valid);
    }

    #[test]
    fn test_fast_path_produces_reduced_shape() {
        let profile = test_planner().compute_profile_fast(8.0, 1000.0, 1000.0);
        assert!(profile.valid);
        assert_eq!(profile.shape, ProfileShape::Reduced);
        assert_conserved(&profile);
        assert!((profile.cruise_velocity - 1000.0).abs() < 1e-9);
        assert!((profile.phase_end_velocity[6] - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_fast_path_delegates_long_moves() {
        // 80 mm is nowhere near the short-move envelope
        let profile = test_planner().compute_profile_fast(80.0, 0.0, 0.0);
        assert!(profile.valid);
        assert_ne!(profile.shape, ProfileShape::Reduced);
        assert_conserved(&profile);
    }

    #[test]
    fn test_fast_path_delegates_large_speed_delta() {
        let profile = test_planner().compute_profile_fast(8.0, 0.0, 1800.0);
        assert_ne!(profile.shape, ProfileShape::Reduced);
    }

    #[test]
    fn test_fast_path_from_standstill() {
        let profile = test_planner().compute_profile_fast(5.0, 0.0, 0.0);
        assert!(profile.valid);
        assert_eq!(profile.shape, ProfileShape::Reduced);
        assert_conserved(&profile);
        assert!(profile.total_time > 0.0);
    }

    #[test]
    fn test_reduced_weights_sum_to_one() {
        let sum: f64 = REDUCED_TIME_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heuristic_ramp_time_window() {
        let tuning = ScurveTuning::default();
        // 4 ms ramp: below the perceptibility floor
        assert!(!should_use_s_curve(100.0, 250_000.0, 1000.0, &tuning));
        // 600 ms ramp: excessive smoothing
        assert!(!should_use_s_curve(100.0, 1000.0, 600.0, &tuning));
        // 50 ms ramp with plenty of distance
        assert!(should_use_s_curve(50.0, 20_000.0, 1000.0, &tuning));
        // Same ramp, distance under 4*a*Tj² = 10 mm
        assert!(!should_use_s_curve(9.0, 20_000.0, 1000.0, &tuning));
        // Disabled limits never qualify
        assert!(!should_use_s_curve(100.0, 0.0, 1000.0, &tuning));
        assert!(!should_use_s_curve(100.0, 20_000.0, 0.0, &tuning));
    }

    #[test]
    fn test_peak_fit_matches_quadratic_in_plateau_case() {
        // Limits chosen so the distance-limited peak keeps both plateaus
        let planner = ScurvePlanner::new(
            AxisLimits {
                max_velocity: 12_000.0,
                max_acceleration: 1000.0,
                max_jerk: 100_000.0,
            },
            ScurveTuning::default(),
        );
        let profile = planner.compute_profile(20.0, 0.0, 0.0);
        assert!(profile.valid);
        assert_eq!(profile.shape, ProfileShape::NoCruise);
        assert_conserved(&profile);
        assert!(profile.phase_duration[1] > 0.0);
        assert!(profile.phase_duration[5] > 0.0);
        assert!(profile.phase_duration[3] < 1e-6);
    }
}
