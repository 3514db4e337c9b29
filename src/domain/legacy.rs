//! Tag-switch payment dispatcher.
//!
//! Every new payment kind forces an edit to `calc_payment`. It is kept for
//! comparison with `PaymentRegistry`, and fails on unknown tags instead of
//! quietly returning zero.

use super::money::Money;
use crate::error::{Result, SolidError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const CASH: &str = "CASH";
pub const CREDIT_CARD: &str = "CREDIT_CARD";

pub fn calc_payment(method: &str, value: Money) -> Result<Money> {
    let factor = match method {
        CASH => dec!(0.9),
        CREDIT_CARD => Decimal::ONE,
        other => return Err(SolidError::UnsupportedVariant(other.to_string())),
    };
    Ok(Money(value.0 * factor))
}
