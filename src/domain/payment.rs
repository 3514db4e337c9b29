use super::money::{Money, Percentage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt::Debug;

pub const CASH: &str = "cash";
pub const CREDIT_CARD: &str = "credit_card";

const CASH_DISCOUNT: Decimal = dec!(10);
const CREDIT_CARD_DISCOUNT: Decimal = dec!(0);

/// Applies a percentage discount to `value`.
///
/// Shared by every payment method. The result is never negative because
/// `Percentage` is bounded to `[0, 100]`.
pub fn calc_discount(value: Money, percent: Percentage) -> Money {
    Money(value.0 - value.0 * percent.fraction())
}

/// A way of paying that knows its own discount rule.
///
/// New payment kinds implement this trait and are registered with
/// `PaymentRegistry`; no existing method needs to change.
pub trait PaymentMethod: Debug + Send + Sync {
    /// Registry key, lowercase with `_` separators.
    fn kind(&self) -> &str;

    fn discount(&self) -> Percentage;

    /// Final payable amount for `value`.
    fn calc(&self, value: Money) -> Money;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashPayment {
    discount: Percentage,
}

impl CashPayment {
    pub fn with_discount(discount: Percentage) -> Self {
        Self { discount }
    }
}

impl Default for CashPayment {
    fn default() -> Self {
        Self::with_discount(Percentage(CASH_DISCOUNT))
    }
}

impl PaymentMethod for CashPayment {
    fn kind(&self) -> &str {
        CASH
    }

    fn discount(&self) -> Percentage {
        self.discount
    }

    fn calc(&self, value: Money) -> Money {
        calc_discount(value, self.discount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreditCardPayment {
    discount: Percentage,
}

impl CreditCardPayment {
    pub fn with_discount(discount: Percentage) -> Self {
        Self { discount }
    }
}

impl Default for CreditCardPayment {
    fn default() -> Self {
        Self::with_discount(Percentage(CREDIT_CARD_DISCOUNT))
    }
}

impl PaymentMethod for CreditCardPayment {
    fn kind(&self) -> &str {
        CREDIT_CARD
    }

    fn discount(&self) -> Percentage {
        self.discount
    }

    fn calc(&self, value: Money) -> Money {
        calc_discount(value, self.discount)
    }
}
