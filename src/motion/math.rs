// src/motion/math.rs - small algebraic helpers used by profile synthesis

/// Coefficients below this magnitude are treated as zero when classifying
/// the equation as linear or degenerate.
const COEFF_EPS: f64 = 1e-12;

/// Solve `a*x² + b*x + c = 0` for real roots.
///
/// Returns `Some((x1, x2))` with `x1 >= x2`, or `None` when no real solution
/// exists. A near-zero `a` degrades to the linear case `b*x + c = 0` (both
/// roots equal); a near-zero `b` as well means there is nothing to solve.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a.abs() < COEFF_EPS {
        if b.abs() < COEFF_EPS {
            return None;
        }
        let x = -c / b;
        return Some((x, x));
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let x1 = (-b + sqrt_d) / (2.0 * a);
    let x2 = (-b - sqrt_d) / (2.0 * a);
    Some((x1.max(x2), x1.min(x2)))
}
