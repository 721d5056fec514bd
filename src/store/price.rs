// Fixed two-decimal money amount

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Non-negative amount held as whole cents, always shown with two decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("'{0}' is not a decimal amount")]
    Malformed(String),
    #[error("'{0}' is too large")]
    OutOfRange(String),
}

impl Price {
    pub const ZERO: Price = Price { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    /// Arithmetic mean rounded to the nearest cent (halves round up).
    /// An empty input yields zero.
    pub fn mean<I>(prices: I) -> Price
    where
        I: IntoIterator<Item = Price>,
    {
        let (total, count) = prices
            .into_iter()
            .fold((0u128, 0u128), |(total, count), price| {
                (total + u128::from(price.cents), count + 1)
            });

        if count == 0 {
            return Price::ZERO;
        }

        let rounded = (2 * total + count) / (2 * count);
        Price::from_cents(rounded as u64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Parses plain decimal text ("12", "12.5", ".99"). Digits past the second
/// decimal place round half up.
impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let malformed = || PriceError::Malformed(text.to_string());

        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(malformed());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| PriceError::OutOfRange(text.to_string()))?
        };

        let digits = frac.as_bytes();
        let mut cents = 0u64;
        for i in 0..2 {
            cents = cents * 10 + digits.get(i).map_or(0, |d| u64::from(d - b'0'));
        }
        if digits.get(2).is_some_and(|d| *d >= b'5') {
            cents += 1;
        }

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Price::from_cents)
            .ok_or_else(|| PriceError::OutOfRange(text.to_string()))
    }
}
