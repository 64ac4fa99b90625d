//! # Money
//!
//! Exact fixed-point currency amounts: whole `units` plus `nanos` (10^-9 units), both carrying
//! the same sign. All arithmetic is integer arithmetic; nothing here ever rounds.

use std::fmt::{self, Display};

pub const NANOS_MIN: i32 = -999_999_999;
pub const NANOS_MAX: i32 = 999_999_999;
pub const NANOS_MOD: i32 = 1_000_000_000;

/// Errors raised by money arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// Nanos out of range, or nanos and units with opposite signs.
    #[error("one of the specified money values is invalid")]
    InvalidValue,

    #[error("mismatching currency codes: {left} and {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("money amount overflowed")]
    Overflow,
}

/// An amount of money in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    /// ISO-4217 style code, e.g. `"USD"`.
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Self {
        Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        }
    }

    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(currency_code, 0, 0)
    }

    /// Nanos within range and sharing the sign of units (or one of them zero).
    pub fn is_valid(&self) -> bool {
        (NANOS_MIN..=NANOS_MAX).contains(&self.nanos) && self.signs_match()
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0 && self.nanos == 0
    }

    /// The same amount with the opposite sign.
    pub fn negate(&self) -> Result<Money, MoneyError> {
        if !self.is_valid() {
            return Err(MoneyError::InvalidValue);
        }
        let units = self.units.checked_neg().ok_or(MoneyError::Overflow)?;
        Ok(Money::new(self.currency_code.clone(), units, -self.nanos))
    }

    fn signs_match(&self) -> bool {
        self.nanos == 0 || self.units == 0 || (self.nanos < 0) == (self.units < 0)
    }

    /// Adds two amounts of the same currency.
    ///
    /// Units and nanos are added independently, then nanos overflowing a whole unit are
    /// carried, and a sign disagreement between the fields is resolved by borrowing one unit.
    pub fn sum(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.is_valid() || !other.is_valid() {
            return Err(MoneyError::InvalidValue);
        }
        if self.currency_code != other.currency_code {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency_code.clone(),
                right: other.currency_code.clone(),
            });
        }

        let units = self
            .units
            .checked_add(other.units)
            .ok_or(MoneyError::Overflow)?;
        // Both operands are within +-999_999_999, so this cannot overflow an i32.
        let nanos = self.nanos + other.nanos;

        let (units, nanos) = normalize(units, i64::from(nanos))?;
        Ok(Money::new(self.currency_code.clone(), units, nanos))
    }

    /// Multiplies by a non-negative quantity, e.g. a unit price into a line total.
    pub fn multiply(&self, quantity: u32) -> Result<Money, MoneyError> {
        if !self.is_valid() {
            return Err(MoneyError::InvalidValue);
        }
        let quantity = i64::from(quantity);
        let units = self
            .units
            .checked_mul(quantity)
            .ok_or(MoneyError::Overflow)?;
        // |nanos| < 10^9 and quantity < 2^32, so the product fits an i64.
        let nanos = i64::from(self.nanos) * quantity;

        let (units, nanos) = normalize(units, nanos)?;
        Ok(Money::new(self.currency_code.clone(), units, nanos))
    }
}

/// Carries whole units out of `nanos`, then makes both fields agree in sign.
fn normalize(units: i64, nanos: i64) -> Result<(i64, i32), MoneyError> {
    let modulus = i64::from(NANOS_MOD);
    let mut units = units
        .checked_add(nanos / modulus)
        .ok_or(MoneyError::Overflow)?;
    let mut nanos = nanos % modulus;

    if units > 0 && nanos < 0 {
        units -= 1;
        nanos += modulus;
    } else if units < 0 && nanos > 0 {
        units += 1;
        nanos -= modulus;
    }

    // |nanos| < 10^9 after the remainder.
    Ok((units, nanos as i32))
}

/// Unwraps a money result whose success the caller guarantees (e.g. both operands built in
/// the same currency).
///
/// # Panics
///
/// Panics if the result is an error, which means that guarantee was broken.
#[track_caller]
pub fn must(result: Result<Money, MoneyError>) -> Money {
    match result {
        Ok(money) => money,
        Err(e) => panic!("money invariant violated: {e}"),
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 || self.nanos < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:09} {}",
            sign,
            self.units.unsigned_abs(),
            self.nanos.unsigned_abs(),
            self.currency_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(units: i64, nanos: i32) -> Money {
        Money::new("USD", units, nanos)
    }

    /// A spread of valid amounts: zero, whole, fractional, near the nanos limit, negative.
    fn samples() -> Vec<Money> {
        vec![
            usd(0, 0),
            usd(1, 0),
            usd(0, 1),
            usd(0, 999_999_999),
            usd(3, 500_000_000),
            usd(10, 990_000_000),
            usd(-1, 0),
            usd(0, -999_999_999),
            usd(-2, -750_000_000),
            usd(-10, -10),
            usd(123_456, 789),
        ]
    }

    #[test]
    fn test_sum_without_carry() {
        assert_eq!(usd(1, 100).sum(&usd(2, 200)).unwrap(), usd(3, 300));
    }

    #[test]
    fn test_sum_carries_nanos_into_units() {
        assert_eq!(
            usd(10, 600_000_000).sum(&usd(5, 500_000_000)).unwrap(),
            usd(16, 100_000_000)
        );
        assert_eq!(
            usd(0, 600_000_000).sum(&usd(0, 600_000_000)).unwrap(),
            usd(1, 200_000_000)
        );
        assert_eq!(
            usd(-1, -600_000_000).sum(&usd(-1, -600_000_000)).unwrap(),
            usd(-3, -200_000_000)
        );
    }

    #[test]
    fn test_sum_borrows_when_signs_differ() {
        assert_eq!(usd(5, 0).sum(&usd(0, -250_000_000)).unwrap(), usd(4, 750_000_000));
        assert_eq!(usd(-5, 0).sum(&usd(0, 250_000_000)).unwrap(), usd(-4, -750_000_000));
        assert_eq!(usd(1, 0).sum(&usd(-1, -500_000_000)).unwrap(), usd(0, -500_000_000));
    }

    #[test]
    fn test_sum_to_zero() {
        assert_eq!(usd(3, 250).sum(&usd(-3, -250)).unwrap(), usd(0, 0));
    }

    #[test]
    fn test_sum_rejects_mismatching_currencies() {
        let result = usd(1, 0).sum(&Money::new("EUR", 1, 0));
        assert_eq!(
            result,
            Err(MoneyError::CurrencyMismatch {
                left: "USD".to_string(),
                right: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_sum_rejects_mismatch_for_every_pair() {
        let codes = ["USD", "EUR", "JPY", "usd", ""];
        for left in codes {
            for right in codes {
                if left == right {
                    continue;
                }
                let result = Money::new(left, 1, 0).sum(&Money::new(right, 2, 0));
                assert!(
                    matches!(result, Err(MoneyError::CurrencyMismatch { .. })),
                    "{left} + {right} should mismatch"
                );
            }
        }
    }

    #[test]
    fn test_sum_rejects_invalid_values() {
        assert_eq!(
            usd(1, 1_000_000_000).sum(&usd(1, 0)),
            Err(MoneyError::InvalidValue)
        );
        assert_eq!(usd(1, -5).sum(&usd(1, 0)), Err(MoneyError::InvalidValue));
        assert_eq!(usd(0, 0).sum(&usd(-1, 5)), Err(MoneyError::InvalidValue));
    }

    #[test]
    fn test_sum_reports_overflow() {
        assert_eq!(usd(i64::MAX, 0).sum(&usd(1, 0)), Err(MoneyError::Overflow));
        assert_eq!(
            usd(i64::MAX, 600_000_000).sum(&usd(0, 600_000_000)),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn test_sum_is_commutative() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.sum(&b), b.sum(&a), "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_sum_is_associative() {
        for a in samples() {
            for b in samples() {
                for c in samples() {
                    let left = a.sum(&b).unwrap().sum(&c).unwrap();
                    let right = a.sum(&b.sum(&c).unwrap()).unwrap();
                    assert_eq!(left, right, "({a} + {b}) + {c}");
                }
            }
        }
    }

    #[test]
    fn test_sum_always_normalizes() {
        for a in samples() {
            for b in samples() {
                let total = a.sum(&b).unwrap();
                assert!(total.is_valid(), "{a} + {b} = {total:?}");
                assert!(total.nanos.unsigned_abs() < NANOS_MOD as u32);
            }
        }
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 here, unlike with floats.
        assert_eq!(
            usd(0, 100_000_000).sum(&usd(0, 200_000_000)).unwrap(),
            usd(0, 300_000_000)
        );
    }

    #[test]
    fn test_multiply_line_total() {
        assert_eq!(usd(10, 0).multiply(2).unwrap(), usd(20, 0));
        assert_eq!(usd(19, 990_000_000).multiply(3).unwrap(), usd(59, 970_000_000));
        assert_eq!(usd(0, 500_000_000).multiply(5).unwrap(), usd(2, 500_000_000));
        assert_eq!(usd(7, 7).multiply(0).unwrap(), usd(0, 0));
    }

    #[test]
    fn test_multiply_matches_repeated_sum() {
        for m in samples() {
            let mut expected = Money::zero("USD");
            for n in 0..6u32 {
                assert_eq!(m.multiply(n).unwrap(), expected, "{m} * {n}");
                expected = expected.sum(&m).unwrap();
            }
        }
    }

    #[test]
    fn test_multiply_reports_overflow() {
        assert_eq!(usd(i64::MAX / 2 + 1, 0).multiply(2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_negate_cancels_out() {
        for m in samples() {
            let back = m.sum(&m.negate().unwrap()).unwrap();
            assert!(back.is_zero(), "{m} + -{m} = {back}");
        }
        assert_eq!(usd(i64::MIN, 0).negate(), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_negate_rejects_invalid_values() {
        assert_eq!(usd(0, i32::MIN).negate(), Err(MoneyError::InvalidValue));
        assert_eq!(usd(1, -1).negate(), Err(MoneyError::InvalidValue));
    }

    #[test]
    fn test_must_passes_through_success() {
        assert_eq!(must(usd(1, 0).sum(&usd(1, 0))), usd(2, 0));
    }

    #[test]
    #[should_panic(expected = "money invariant violated")]
    fn test_must_panics_on_error() {
        must(usd(1, 0).sum(&Money::new("EUR", 1, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new("EUR", 22, 500_000_000).to_string(), "22.500000000 EUR");
        assert_eq!(usd(0, -5).to_string(), "-0.000000005 USD");
        assert_eq!(usd(-3, -250_000_000).to_string(), "-3.250000000 USD");
    }
}
