use crate::domain::money::{Money, Percentage};
use crate::domain::payment::{CashPayment, CreditCardPayment, PaymentMethod};
use crate::error::{Result, SolidError};
use std::collections::HashMap;
use tracing::{debug, info};

/// Discount settings applied to the built-in payment methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryConfig {
    pub cash_discount: Percentage,
    pub credit_card_discount: Percentage,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            cash_discount: CashPayment::default().discount(),
            credit_card_discount: CreditCardPayment::default().discount(),
        }
    }
}

/// Selects a `PaymentMethod` by kind.
///
/// Kinds are matched case-insensitively. Supporting a new kind means
/// registering another `PaymentMethod`; the registry itself never changes.
#[derive(Debug, Default)]
pub struct PaymentRegistry {
    methods: HashMap<String, Box<dyn PaymentMethod>>,
}

impl PaymentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding cash and credit card with their default discounts.
    pub fn with_defaults() -> Self {
        Self::from_config(&RegistryConfig::default())
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CashPayment::with_discount(config.cash_discount)));
        registry.register(Box::new(CreditCardPayment::with_discount(
            config.credit_card_discount,
        )));
        registry
    }

    /// Adds `method` under its kind, returning any method it replaced.
    pub fn register(&mut self, method: Box<dyn PaymentMethod>) -> Option<Box<dyn PaymentMethod>> {
        let key = normalize(method.kind());
        info!(
            kind = %key,
            discount = %method.discount().value(),
            "payment method registered"
        );
        self.methods.insert(key, method)
    }

    pub fn get(&self, kind: &str) -> Result<&dyn PaymentMethod> {
        self.methods
            .get(&normalize(kind))
            .map(|method| method.as_ref())
            .ok_or_else(|| SolidError::UnsupportedVariant(kind.trim().to_string()))
    }

    /// Payable amount for `value` using the method registered as `kind`.
    pub fn calc(&self, kind: &str, value: Money) -> Result<Money> {
        let method = self.get(kind)?;
        let payable = method.calc(value);
        debug!(
            kind = method.kind(),
            value = %value.value(),
            payable = %payable.value(),
            "payment calculated"
        );
        Ok(payable)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

fn normalize(kind: &str) -> String {
    kind.trim().to_ascii_lowercase()
}
