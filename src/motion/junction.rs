// src/motion/junction.rs - cornering velocity between consecutive moves

/// Safe cornering velocity (mm/min) at the junction of two consecutive moves.
///
/// Advisory only: the caller takes the minimum of this and its traditional
/// centripetal-acceleration limit, and neither move is mutated. Returns 0.0
/// ("defer to the traditional method") when the jerk or acceleration limit is
/// non-positive or a segment length is degenerate.
///
/// `angle_factor` is derived by the caller from the direction change between
/// the segments and must already encode "sharper corner, smaller factor,
/// lower velocity".
///
/// When the shorter adjacent segment cannot even contain two full jerk ramps,
/// the junction is distance-limited and scales with the room that is actually
/// there; otherwise the jerk limit itself sets the cornering speed.
pub fn junction_velocity(
    segment1_length: f64,
    segment2_length: f64,
    max_acceleration: f64,
    max_jerk: f64,
    angle_factor: f64,
) -> f64 {
    if max_jerk <= 0.0 || max_acceleration <= 0.0 {
        return 0.0;
    }
    let shorter = segment1_length.min(segment2_length);
    if shorter <= 0.0 || angle_factor <= 0.0 {
        return 0.0;
    }

    let ramp_time = max_acceleration / max_jerk;
    // Exact distance covered from rest during one jerk ramp
    let ramp_distance = max_jerk * ramp_time * ramp_time * ramp_time / 6.0;

    let v = if shorter < 2.0 * ramp_distance {
        (shorter * max_acceleration * angle_factor).sqrt()
    } else {
        (max_acceleration * max_acceleration / max_jerk * angle_factor).sqrt()
    };
    v * 60.0
}
