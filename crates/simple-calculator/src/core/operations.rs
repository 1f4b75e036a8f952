//! Binary operations behind the four operator buttons

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - the only operators the keypad offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Looks up an operation by its button symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Computes `lhs <op> rhs`.
    ///
    /// Addition, subtraction and multiplication are exact. Division
    /// rounds the quotient to `division_scale` fractional digits, ties
    /// away from zero.
    pub fn apply(
        self,
        lhs: &BigDecimal,
        rhs: &BigDecimal,
        division_scale: u32,
    ) -> CalcResult<BigDecimal> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => divide_half_up(lhs, rhs, division_scale),
        }
    }
}

/// Divides to exactly `scale` fractional digits, rounding half away
/// from zero.
///
/// Works on the unscaled integers so no digit is lost before the final
/// rounding step.
pub(crate) fn divide_half_up(
    lhs: &BigDecimal,
    rhs: &BigDecimal,
    scale: u32,
) -> CalcResult<BigDecimal> {
    if rhs.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    // lhs / rhs = (n / d) * 10^(rhs_scale - lhs_scale)
    let (mut numerator, lhs_scale) = lhs.as_bigint_and_exponent();
    let (mut denominator, rhs_scale) = rhs.as_bigint_and_exponent();
    let shift = i64::from(scale) + rhs_scale - lhs_scale;
    let power = u32::try_from(shift.unsigned_abs())
        .map_err(|_| CalcError::InvalidResult(format!("{lhs} / {rhs}")))?;
    let factor = BigInt::from(10u8).pow(power);
    if shift >= 0 {
        numerator *= factor;
    } else {
        denominator *= factor;
    }

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;
    if remainder.abs() * BigInt::from(2u8) >= denominator.abs() {
        if numerator.sign() == denominator.sign() {
            quotient += BigInt::one();
        } else {
            quotient -= BigInt::one();
        }
    }

    Ok(BigDecimal::new(quotient, i64::from(scale)))
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
