/*
 * Pi approximation
 * Evaluates the continued fraction
 *     π/2 = 1 + 1/3·(1 + 2/5·(1 + 3/7·(1 + …)))
 * from its tail to its head. Each refinement step roughly halves the error.
 */
use crate::error::{FractreeError, Result};

/// Number of refinement steps used to orient the trunk.
pub const TRUNK_PI_ITERATIONS: i32 = 100;

/// Approximates π using `n` refinement steps of the continued fraction.
///
/// `approximate_pi(0)` is `2.0`, the value converges toward π as `n` grows.
/// A negative `n` is rejected with [`FractreeError::InvalidArgument`].
pub fn approximate_pi(n: i32) -> Result<f64> {
    if n < 0 {
        return Err(FractreeError::InvalidArgument(format!(
            "pi approximation needs a non-negative iteration count, got {}",
            n
        )));
    }

    let accumulator = (1..=n).rev().fold(1.0_f64, |last, k| {
        let k = k as f64;
        1.0 + k / (k * 2.0 + 1.0) * last
    });

    Ok(accumulator * 2.0)
}

/// Angle of the trunk, pointing straight up in screen coordinates.
pub fn trunk_angle() -> Result<f64> {
    Ok(-approximate_pi(TRUNK_PI_ITERATIONS)? / 2.0)
}
