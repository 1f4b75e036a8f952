//! Square root by Newton-Raphson iteration on decimals

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::core::operations::divide_half_up;
use crate::core::{CalcError, CalcResult};

/// Computes the square root of `value` to `scale` fractional digits.
///
/// The iteration is seeded with the `f64` square root and refined until
/// two successive estimates differ by at most `10^-scale`. Each step
/// rounds half away from zero to `scale` digits.
///
/// A negative `value` yields a NaN seed, which cannot become a decimal
/// and is reported as [`CalcError::InvalidResult`]. Zero seeds at zero
/// and never enters the loop.
pub fn newton_sqrt(value: &BigDecimal, scale: u32) -> CalcResult<BigDecimal> {
    let seed = value
        .to_f64()
        .ok_or_else(|| CalcError::InvalidResult(value.to_string()))?
        .sqrt();
    let mut x1 =
        BigDecimal::from_f64(seed).ok_or_else(|| CalcError::InvalidResult(seed.to_string()))?;
    let mut x0 = BigDecimal::zero();
    let tolerance = BigDecimal::new(BigInt::one(), i64::from(scale));
    let two = BigDecimal::from(2);

    while (&x1 - &x0).abs() > tolerance {
        x0 = x1;
        x1 = divide_half_up(value, &x0, scale)?;
        x1 = divide_half_up(&(&x1 + &x0), &two, scale)?;
    }

    Ok(x1)
}
