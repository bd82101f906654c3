use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A currency amount held as whole cents.
///
/// Stored values are plain decimal numbers (`15.5`, `"484.50"`), so both the
/// serde form and `FromStr` accept anything that parses as a finite decimal
/// and round it to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(i64);

#[derive(Debug, Error, PartialEq)]
pub enum ParseMoneyError {
    #[error("`{0}` is not a decimal amount")]
    NotANumber(String),

    #[error("amount must be finite")]
    NotFinite,
}

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn from_f64(value: f64) -> Result<Self, ParseMoneyError> {
        if !value.is_finite() {
            return Err(ParseMoneyError::NotFinite);
        }
        Ok(Self((value * 100.0).round() as i64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Subtracts `other`, returning `None` when the result would go below zero.
    pub fn checked_debit(self, other: Money) -> Option<Money> {
        let left = self.0.checked_sub(other.0)?;
        (left >= 0).then_some(Money(left))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ParseMoneyError::NotANumber(trimmed.to_string()))?;
        Self::from_f64(value)
    }
}

impl TryFrom<f64> for Money {
    type Error = ParseMoneyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl From<Money> for f64 {
    fn from(value: Money) -> f64 {
        value.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_two_decimals() {
        assert_eq!(Money::from_cents(48450).to_string(), "484.50");
        assert_eq!(Money::from_cents(500_00).to_string(), "500.00");
        assert_eq!(Money::from_cents(7).to_string(), "0.07");
        assert_eq!(Money::from_cents(-150).to_string(), "-1.50");
    }

    #[test]
    fn parses_loose_decimal_strings() {
        assert_eq!("484.5".parse::<Money>().unwrap(), Money::from_cents(48450));
        assert_eq!("500".parse::<Money>().unwrap(), Money::from_cents(50000));
        assert_eq!(" 15.50 ".parse::<Money>().unwrap(), Money::from_cents(1550));
    }

    #[test]
    fn rejects_garbage_and_infinity() {
        assert!(matches!("abc".parse::<Money>(), Err(ParseMoneyError::NotANumber(_))));
        assert_eq!("inf".parse::<Money>(), Err(ParseMoneyError::NotFinite));
        assert_eq!("NaN".parse::<Money>(), Err(ParseMoneyError::NotFinite));
    }

    #[test]
    fn checked_debit_stops_at_zero() {
        let balance = Money::from_cents(1500);
        assert_eq!(balance.checked_debit(Money::from_cents(1550)), None);
        assert_eq!(balance.checked_debit(Money::from_cents(1500)), Some(Money::ZERO));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_cents(1550)).unwrap();
        assert_eq!(json, "15.5");
        let back: Money = serde_json::from_str("20").unwrap();
        assert_eq!(back, Money::from_cents(2000));
    }
}
