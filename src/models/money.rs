//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (kuruş, cents) as i64 to avoid
//! floating-point precision issues. The currency itself travels next to the
//! amount as a code; see [`super::currency`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use kasa::models::Money;
    /// let amount = Money::from_minor(590050); // 5.900,50
    /// assert_eq!(amount.major(), 5900);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use kasa::models::Money;
    /// assert_eq!(Money::from_major(5900).minor(), 590000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a Money amount from whole units and minor units
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor units portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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
        Self(self.0.abs())
    }

    /// Amount in whole units as a float, for CSV output and percentages
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// The given percentage of this amount, rounded half away from zero
    ///
    /// # Examples
    /// ```
    /// use kasa::models::Money;
    /// assert_eq!(Money::from_major(5000).percentage(18), Money::from_major(900));
    /// assert_eq!(Money::from_minor(5).percentage(50), Money::from_minor(3));
    /// ```
    pub fn percentage(&self, percent: u32) -> Self {
        let scaled = self.0 as i128 * percent as i128;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Self(rounded as i64)
    }

    /// Split into `parts` amounts that add back up to this one
    ///
    /// Every part gets the truncated share; the remainder goes to the last part.
    /// Returns an empty vector for zero parts.
    pub fn split(&self, parts: u32) -> Vec<Money> {
        if parts == 0 {
            return Vec::new();
        }
        let share = self.0 / parts as i64;
        let remainder = self.0 - share * parts as i64;
        let mut result = vec![Money(share); parts as usize];
        if let Some(last) = result.last_mut() {
            last.0 += remainder;
        }
        result
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "5900", "5900.50", "-12.5", "5.900,50", "5900,50" and an optional
    /// leading currency symbol or trailing "TL". When a comma is present it is
    /// the decimal separator and dots are thousands separators.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.trim_start_matches(['₺', '$', '€']);
        let s = s
            .strip_suffix("TL")
            .or_else(|| s.strip_suffix("tl"))
            .unwrap_or(s)
            .trim();

        let normalized = if s.contains(',') {
            s.replace('.', "").replace(',', ".")
        } else {
            s.to_string()
        };

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let minor = match normalized.split_once('.') {
            Some((whole, fraction)) => {
                if whole.is_empty()
                    || !whole.bytes().all(|b| b.is_ascii_digit())
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(invalid());
                }
                let whole: i64 = whole.parse().map_err(|_| invalid())?;
                let fraction_minor: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(fraction_minor))
                    .ok_or_else(invalid)?
            }
            None if !normalized.bytes().all(|b| b.is_ascii_digit()) => return Err(invalid()),
            None => normalized
                .parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Turkish number style: dot thousands separator, comma decimals (`5.900,50`)
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.major().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        let text = format!("{}{},{:02}", sign, grouped, self.minor_part());
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display_uses_turkish_grouping() {
        assert_eq!(Money::from_major(5900).to_string(), "5.900,00");
        assert_eq!(Money::from_minor(0).to_string(), "0,00");
        assert_eq!(Money::from_minor(5).to_string(), "0,05");
        assert_eq!(Money::from_minor(-123456789).to_string(), "-1.234.567,89");
        assert_eq!(Money::from_major(100).to_string(), "100,00");
        assert_eq!(format!("{:>10}", Money::from_major(1)), "      1,00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.5").unwrap().minor(), -1050);
        assert_eq!(Money::parse("5900").unwrap().minor(), 590000);
        assert_eq!(Money::parse("5.900,50").unwrap().minor(), 590050);
        assert_eq!(Money::parse("5900,5").unwrap().minor(), 590050);
        assert_eq!(Money::parse("₺17.700,00").unwrap().minor(), 1770000);
        assert_eq!(Money::parse("250 TL").unwrap().minor(), 25000);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digit_parts() {
        assert!(Money::parse("5.€").is_err());
        assert!(Money::parse("5.₺₺").is_err());
        assert!(Money::parse("5.-5").is_err());
        assert!(Money::parse("5,-5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse("--5").is_err());
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_major(5000).percentage(18), Money::from_major(900));
        assert_eq!(Money::from_minor(333).percentage(20), Money::from_minor(67));
        assert_eq!(Money::from_minor(-333).percentage(20), Money::from_minor(-67));
        assert_eq!(Money::from_major(10).percentage(0), Money::zero());
    }

    #[test]
    fn test_split_puts_remainder_last() {
        let parts = Money::from_minor(1000).split(3);
        assert_eq!(
            parts,
            vec![Money::from_minor(333), Money::from_minor(333), Money::from_minor(334)]
        );
        assert_eq!(parts.iter().sum::<Money>(), Money::from_minor(1000));
        assert!(Money::from_minor(1000).split(0).is_empty());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_minor(100),
            Money::from_minor(200),
            Money::from_minor(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
