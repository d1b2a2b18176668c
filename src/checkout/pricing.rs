//! Line-item pricing for the hosted checkout page
//!
//! Item prices are stored in major currency units. The provider wants minor
//! units, and the storefront prices are quoted in a foreign base, so every
//! unit price is scaled by 100 (minor units) x 80 (fixed exchange rate).
//! One flat delivery-charge line is appended to every checkout.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::{CheckoutError, LineItem};
use crate::orders::models::OrderItem;

/// Minor currency units per major unit
pub const MINOR_UNITS_PER_UNIT: u32 = 100;

/// Fixed exchange rate applied to quoted prices
pub const EXCHANGE_RATE: u32 = 80;

/// Delivery charge in major quoted units
pub const DELIVERY_CHARGE_UNITS: u32 = 2;

/// Name shown for the delivery line on the checkout page
pub const DELIVERY_LINE_NAME: &str = "Delivery Charges";

/// Scale a quoted unit price into provider minor units (x100 x80)
pub fn unit_amount_minor(price: Decimal) -> Result<u64, CheckoutError> {
    price
        .checked_mul(Decimal::from(MINOR_UNITS_PER_UNIT as u64 * EXCHANGE_RATE as u64))
        .map(|scaled| scaled.round())
        .and_then(|scaled| scaled.to_u64())
        .ok_or_else(|| CheckoutError::InvalidAmount(price.to_string()))
}

/// Convert order items into the provider's line-item list and append the
/// delivery-charge line (quantity 1)
pub fn build_line_items(
    items: &[OrderItem],
    currency: &str,
) -> Result<Vec<LineItem>, CheckoutError> {
    let mut line_items = Vec::with_capacity(items.len() + 1);
    for item in items {
        line_items.push(LineItem {
            name: item.name.clone(),
            unit_amount_minor: unit_amount_minor(item.price)?,
            currency: currency.to_string(),
            quantity: item.quantity,
        });
    }
    line_items.push(LineItem {
        name: DELIVERY_LINE_NAME.to_string(),
        unit_amount_minor: u64::from(DELIVERY_CHARGE_UNITS)
            * u64::from(MINOR_UNITS_PER_UNIT)
            * u64::from(EXCHANGE_RATE),
        currency: currency.to_string(),
        quantity: 1,
    });
    Ok(line_items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn item(name: &str, price: &str, quantity: u32) -> OrderItem {
        OrderItem {
            name: name.to_string(),
            price: Decimal::from_str(price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn pizza_example_totals() {
        // Pizza @ 10 x2 -> unit 80000 minor, line total 160000; delivery 16000
        let lines = build_line_items(&[item("Pizza", "10", 2)], "inr").unwrap();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].name, "Pizza");
        assert_eq!(lines[0].unit_amount_minor, 80_000);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].currency, "inr");

        assert_eq!(lines[1].name, DELIVERY_LINE_NAME);
        assert_eq!(lines[1].unit_amount_minor, 16_000);
        assert_eq!(lines[1].quantity, 1);

        let total: u64 = lines
            .iter()
            .map(|l| l.unit_amount_minor * u64::from(l.quantity))
            .sum();
        assert_eq!(total, 2 * 10 * 8000 + 16_000);
    }

    #[test]
    fn fractional_prices_round_to_minor_units() {
        assert_eq!(unit_amount_minor(Decimal::from_str("10.5").unwrap()).unwrap(), 84_000);
        // 0.0001 * 8000 = 0.8 -> rounds to 1 minor unit
        assert_eq!(unit_amount_minor(Decimal::from_str("0.0001").unwrap()).unwrap(), 1);
    }

    #[test]
    fn oversized_price_errors_instead_of_overflowing() {
        assert!(matches!(
            unit_amount_minor(Decimal::MAX),
            Err(CheckoutError::InvalidAmount(_))
        ));
        // Largest representable scaled value still converts cleanly
        assert!(unit_amount_minor(Decimal::from(u64::MAX / 8000)).is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(matches!(
            unit_amount_minor(Decimal::from(-1)),
            Err(CheckoutError::InvalidAmount(_))
        ));
    }

    #[test]
    fn empty_order_still_carries_delivery_line() {
        let lines = build_line_items(&[], "inr").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, DELIVERY_LINE_NAME);
    }
}
