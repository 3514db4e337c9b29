use crate::error::SolidError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative monetary value.
///
/// Wraps `rust_decimal::Decimal` so payment calculations never see a negative
/// base value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(pub(crate) Decimal);

/// A discount rate expressed in percent, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(pub(crate) Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, SolidError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(SolidError::InvalidInput(format!(
                "money must not be negative, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Percentage {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, SolidError> {
        if (Decimal::ZERO..=Decimal::ONE_HUNDRED).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SolidError::InvalidInput(format!(
                "percentage must be within [0, 100], got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The rate as a fraction of one (`10%` is `0.1`).
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl TryFrom<Decimal> for Money {
    type Error = SolidError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = SolidError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(percent: Percentage) -> Self {
        percent.0
    }
}

impl std::str::FromStr for Percentage {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<Decimal>()
            .map_err(|e| SolidError::InvalidInput(format!("percentage {s:?}: {e}")))?;
        Self::new(value)
    }
}
