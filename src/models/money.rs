//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 hundredths) so totals are
//! exact integer sums. Display rounds to whole currency units and groups
//! thousands with commas.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Minor units per whole currency unit
const MINOR_PER_UNIT: i64 = 100;

/// Largest whole-unit amount `parse` accepts
///
/// Leaves headroom so a day's totals stay far from the i64 limit.
pub const MAX_UNITS: i64 = 10_000_000_000_000;

/// Currency symbols accepted (and ignored) in front of an amount
const CURRENCY_SYMBOLS: [char; 4] = ['$', '₦', '€', '£'];

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use riderbook::models::Money;
    /// let amount = Money::from_minor(150_050); // 1,500.50
    /// assert_eq!(amount.to_string(), "1,501");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use riderbook::models::Money;
    /// let amount = Money::from_units(5000);
    /// assert_eq!(amount.to_string(), "5,000");
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * MINOR_PER_UNIT)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole units, rounded half away from zero
    pub const fn rounded_units(&self) -> i64 {
        let whole = self.0 / MINOR_PER_UNIT;
        let rest = self.0 % MINOR_PER_UNIT;
        if rest >= MINOR_PER_UNIT / 2 {
            whole + 1
        } else if rest <= -MINOR_PER_UNIT / 2 {
            whole - 1
        } else {
            whole
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "5000", "5,000", "5000.50", "-250", "₦5,000" and "$10.5".
    /// Bare integers are whole units. Anything beyond `MAX_UNITS` is
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(CURRENCY_SYMBOLS.as_slice());
        let digits: String = s.chars().filter(|c| *c != ',').collect();
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        if digits.is_empty() || digits.starts_with('-') || digits.starts_with('+') {
            return Err(invalid());
        }

        let minor = match digits.split_once('.') {
            Some((units_str, fraction_str)) => {
                let units: i64 = if units_str.is_empty() {
                    0
                } else {
                    units_str.parse().map_err(|_| invalid())?
                };

                if !fraction_str.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }

                // Pad or truncate the fraction to 2 digits
                let fraction: i64 = match fraction_str.len() {
                    0 => 0,
                    1 => fraction_str.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction_str[..2].parse().map_err(|_| invalid())?,
                };

                units
                    .checked_mul(MINOR_PER_UNIT)
                    .and_then(|m| m.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => digits
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(MINOR_PER_UNIT)
                .ok_or_else(invalid)?,
        };

        if minor > MAX_UNITS * MINOR_PER_UNIT {
            return Err(invalid());
        }

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Exact decimal form for machine-readable exports: `-1234.50`
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!(
            "{}{}.{:02}",
            sign,
            abs / MINOR_PER_UNIT as u64,
            abs % MINOR_PER_UNIT as u64
        )
    }
}

/// Group the digits of an integer in threes: `1234567` -> `1,234,567`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = group_thousands(self.rounded_units());
        f.pad(&text)
    }
}

// Saturating: stored data is not bound by the parse cap
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(50);
        assert_eq!(m.minor(), 5000);
        assert_eq!(m.rounded_units(), 50);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_units(0).to_string(), "0");
        assert_eq!(Money::from_units(999).to_string(), "999");
        assert_eq!(Money::from_units(1000).to_string(), "1,000");
        assert_eq!(Money::from_units(1234567).to_string(), "1,234,567");
        assert_eq!(Money::from_units(-2500).to_string(), "-2,500");
    }

    #[test]
    fn test_display_rounds_to_whole_units() {
        assert_eq!(Money::from_minor(150_049).to_string(), "1,500");
        assert_eq!(Money::from_minor(150_050).to_string(), "1,501");
        assert_eq!(Money::from_minor(-250).to_string(), "-3");
        assert_eq!(Money::from_minor(-249).to_string(), "-2");
        assert_eq!(Money::from_minor(49).to_string(), "0");
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>8}", Money::from_units(5000)), "   5,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("5000").unwrap(), Money::from_units(5000));
        assert_eq!(Money::parse("5,000").unwrap(), Money::from_units(5000));
        assert_eq!(Money::parse("₦5,000").unwrap(), Money::from_units(5000));
        assert_eq!(Money::parse("$10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10.505").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-250").unwrap(), Money::from_units(-250));
        assert_eq!(Money::parse(".75").unwrap().minor(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("5.x").is_err());
    }

    #[test]
    fn test_parse_caps_amount() {
        let cap = Money::parse("10,000,000,000,000").unwrap();
        assert_eq!(cap, Money::from_units(MAX_UNITS));
        assert_eq!(cap.to_string(), "10,000,000,000,000");
        assert_eq!(Money::parse("-10000000000000").unwrap(), -cap);

        assert!(Money::parse("10000000000000.01").is_err());
        assert!(Money::parse("10000000000001").is_err());
        assert!(Money::parse("92233720368547758").is_err());
        assert!(Money::parse("92233720368547758.07").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_minor(i64::MAX);
        let min = Money::from_minor(i64::MIN);

        assert_eq!(max + Money::from_units(1), max);
        assert_eq!(min - Money::from_units(1), min);
        assert_eq!((-min).minor(), i64::MAX);
        assert_eq!(min.abs().minor(), i64::MAX);

        let mut total = max;
        total += max;
        assert_eq!(total, max);
        total -= min;
        assert_eq!(total, max);
    }

    #[test]
    fn test_display_extremes() {
        assert_eq!(
            Money::from_minor(i64::MAX).to_string(),
            "92,233,720,368,547,758"
        );
        assert_eq!(
            Money::from_minor(i64::MIN).to_string(),
            "-92,233,720,368,547,758"
        );
        assert_eq!(Money::from_minor(i64::MAX).rounded_units(), 92_233_720_368_547_758);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_units(100),
            Money::from_units(200),
            Money::from_units(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_units(600));
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_minor(150_050).to_decimal_string(), "1500.50");
        assert_eq!(Money::from_minor(-5).to_decimal_string(), "-0.05");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
    }
}
