use rust_decimal_macros::dec;
use solid_patterns::application::payment_registry::PaymentRegistry;
use solid_patterns::domain::money::{Money, Percentage};
use solid_patterns::domain::payment::{PaymentMethod, calc_discount};

/// A payment kind defined entirely outside the library.
#[derive(Debug)]
struct PixPayment {
    discount: Percentage,
}

impl PaymentMethod for PixPayment {
    fn kind(&self) -> &str {
        "pix"
    }

    fn discount(&self) -> Percentage {
        self.discount
    }

    fn calc(&self, value: Money) -> Money {
        calc_discount(value, self.discount)
    }
}

#[test]
fn test_new_kind_registers_without_touching_existing_ones() {
    let mut registry = PaymentRegistry::with_defaults();
    let replaced = registry.register(Box::new(PixPayment {
        discount: Percentage::new(dec!(5)).unwrap(),
    }));
    assert!(replaced.is_none());

    let value = Money::new(dec!(100)).unwrap();
    assert_eq!(registry.calc("pix", value).unwrap().value(), dec!(95));
    assert_eq!(registry.calc("cash", value).unwrap().value(), dec!(90));
    assert_eq!(registry.calc("credit_card", value).unwrap().value(), dec!(100));
    assert_eq!(registry.kinds(), vec!["cash", "credit_card", "pix"]);
}

#[test]
fn test_methods_usable_as_trait_objects() {
    let registry = PaymentRegistry::with_defaults();
    let value = Money::new(dec!(40)).unwrap();

    let total: rust_decimal::Decimal = registry
        .kinds()
        .into_iter()
        .map(|kind| registry.get(kind).unwrap().calc(value).value())
        .sum();
    assert_eq!(total, dec!(76));
}
