//! Square root by coarse integer guess followed by Babylonian refinement.

use crate::error::DomainError;

/// Refinement stops once two consecutive guesses are at most this far apart.
pub const TOLERANCE: f64 = 0.1;

/// 2^128, brings subnormal inputs into the normal range before inversion.
const SUBNORMAL_SCALE: f64 = f64::from_bits(0x47F0_0000_0000_0000);
/// 2^64, the square root of [`SUBNORMAL_SCALE`].
const SUBNORMAL_SCALE_ROOT: f64 = f64::from_bits(0x43F0_0000_0000_0000);

/// Returns the square root of `num`.
///
/// The search works on values `>= 1`: inputs below one are inverted first and
/// the reciprocal of the result is returned. The initial guess is `k - 1`,
/// where `k` is the smallest positive integer with `k * k >= num`, and it is
/// refined with the Babylonian method `next = (num / guess + guess) / 2` until
/// the step is at most [`TOLERANCE`].
///
/// The result is only accurate to roughly one decimal digit.
///
/// # Errors
///
/// * [`DomainError::NegativeSqrt`] if `num` is negative
/// * [`DomainError::OutOfRange`] if `num` is NaN or infinite
///
/// # Examples
///
/// ```
/// use descstat_stats::sqrt::sqrt;
///
/// assert!((sqrt(25.0).unwrap() - 5.0).abs() <= 0.1);
/// assert!((sqrt(0.25).unwrap() - 0.5).abs() <= 0.1);
/// assert_eq!(sqrt(1.0).unwrap(), 1.0);
/// assert!(sqrt(-4.0).is_err());
/// ```
pub fn sqrt(num: f64) -> Result<f64, DomainError> {
    if num.is_nan() || num.is_infinite() {
        return Err(DomainError::OutOfRange { value: num });
    }
    if num < 0.0 {
        return Err(DomainError::NegativeSqrt { value: num });
    }
    if num == 0.0 || num == 1.0 {
        return Ok(num);
    }
    if num < f64::MIN_POSITIVE {
        // sqrt(x * 4^k) / 2^k, so that the reciprocal below does not overflow
        return Ok(sqrt(num * SUBNORMAL_SCALE)? / SUBNORMAL_SCALE_ROOT);
    }

    let inverted = num < 1.0;
    let target = if inverted { num.recip() } else { num };

    let root = babylonian(target, coarse_root(target) - 1.0);
    Ok(if inverted { root.recip() } else { root })
}

/// Smallest positive integer `k` such that `k * k >= num`, for `num > 1`.
fn coarse_root(num: f64) -> f64 {
    let mut hi = 1.0_f64;
    while hi * hi < num {
        hi *= 2.0;
    }

    // lo * lo < num <= hi * hi
    let mut lo = hi / 2.0;
    while hi - lo > 1.0 {
        let mid = ((lo + hi) / 2.0).floor();
        if mid <= lo || mid >= hi {
            break;
        }
        if mid * mid < num {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}

fn babylonian(num: f64, mut guess: f64) -> f64 {
    let mut next = f64::midpoint(num / guess, guess);
    let mut step = (next - guess).abs();
    while step > TOLERANCE {
        guess = next;
        next = f64::midpoint(num / guess, guess);
        let next_step = (next - guess).abs();
        // float resolution reached
        if next_step >= step {
            break;
        }
        step = next_step;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE,
            "expected {expected} (within {TOLERANCE}), got {actual}"
        );
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert_eq!(sqrt(1.0), Ok(1.0));
    }

    #[test]
    fn test_perfect_squares() {
        assert_close(sqrt(4.0).unwrap(), 2.0);
        assert_close(sqrt(25.0).unwrap(), 5.0);
        assert_close(sqrt(144.0).unwrap(), 12.0);
        assert_close(sqrt(1_000_000.0).unwrap(), 1000.0);
    }

    #[test]
    fn test_below_one_is_inverted() {
        assert_close(sqrt(0.25).unwrap(), 0.5);
        assert_close(sqrt(0.01).unwrap(), 0.1);
        assert_close(sqrt(0.5).unwrap(), 0.5_f64.sqrt());
    }

    #[test]
    fn test_low_precision_is_kept() {
        // (2 / 1.5 + 1.5) / 2 is within the tolerance of 1.5, so refinement stops there.
        let root = sqrt(2.0).unwrap();
        assert_eq!(root, f64::midpoint(2.0 / 1.5, 1.5));
        assert_close(root, 2.0_f64.sqrt());
    }

    #[test]
    fn test_coarse_root() {
        assert_eq!(coarse_root(2.0), 2.0);
        assert_eq!(coarse_root(4.0), 2.0);
        assert_eq!(coarse_root(4.5), 3.0);
        assert_eq!(coarse_root(25.0), 5.0);
        assert_eq!(coarse_root(26.0), 6.0);
        assert_eq!(coarse_root(10_000.0), 100.0);
    }

    #[test]
    fn test_large_values_terminate() {
        let root = sqrt(1e300).unwrap();
        assert!((root / 1e150 - 1.0).abs() < 1e-9);
        assert!(sqrt(f64::MAX).unwrap().is_finite());
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            sqrt(-1.0),
            Err(DomainError::NegativeSqrt { value: -1.0 })
        );
        assert!(sqrt(f64::NAN).unwrap_err().is_out_of_range());
        assert!(sqrt(f64::INFINITY).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_subnormal_inputs() {
        let root = sqrt(1e-320).unwrap();
        assert!((root / 1e-160 - 1.0).abs() < 1e-3, "got {root}");

        // smallest subnormal, 2^-1074
        let root = sqrt(f64::from_bits(1)).unwrap();
        assert!((root / 2.0_f64.powi(-537) - 1.0).abs() < 1e-9, "got {root}");

        let root = sqrt(f64::MIN_POSITIVE).unwrap();
        assert!((root * root / f64::MIN_POSITIVE - 1.0).abs() < 1e-9);
    }
}
