use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use anyhow::Context;

/// An amount in minor units (cents). Kept integral so totals stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Parses a non-negative decimal amount like "25", "25.5" or "25.50".
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("price must not be empty"));
        }
        let (units, frac) = match s.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (s, None),
        };
        if units.is_empty() || !units.chars().all(|c| c.is_ascii_digit()) {
            return Err(anyhow::anyhow!("invalid price: {s}"));
        }
        let frac_cents = match frac {
            None => 0,
            Some(f) if f.len() == 1 && f.chars().all(|c| c.is_ascii_digit()) => {
                f.parse::<i64>()? * 10
            }
            Some(f) if f.len() == 2 && f.chars().all(|c| c.is_ascii_digit()) => f.parse::<i64>()?,
            Some(_) => return Err(anyhow::anyhow!("invalid price: {s}")),
        };
        let units: i64 = units.parse().context("price out of range")?;
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(|| anyhow::anyhow!("price out of range: {s}"))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
