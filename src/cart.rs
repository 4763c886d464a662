//! Cart
//!
//! Read-only snapshot of the cart under evaluation. The engine never
//! mutates any of these types; they are decoded once per invocation from
//! the host's camelCase JSON and borrowed from there on.

use rust_decimal::Decimal;
use serde::Deserialize;

/// A cart snapshot: ordered line items plus shipping option groupings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Ordered line items.
    #[serde(default)]
    pub lines: Vec<CartLine>,

    /// Shipping option groupings, in the host's order.
    #[serde(default)]
    pub delivery_groups: Vec<DeliveryGroup>,
}

/// One merchandise entry in the cart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Opaque line handle, echoed back in discount targets.
    pub id: String,

    /// Number of units on the line.
    pub quantity: u64,

    /// Cost amounts reported by the host for this line.
    pub cost: LineCost,

    /// What the line is selling.
    pub merchandise: Merchandise,
}

impl CartLine {
    /// Per-unit cost of the line.
    ///
    /// Prefers the host's explicit per-unit amount and falls back to the
    /// line subtotal when the per-unit figure is absent.
    pub fn unit_cost(&self) -> Decimal {
        self.cost
            .amount_per_quantity
            .as_ref()
            .map_or(self.cost.subtotal_amount.amount, |per_unit| per_unit.amount)
    }
}

/// Cost amounts attached to a cart line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCost {
    /// Cost of a single unit, when the host provides it.
    #[serde(default)]
    pub amount_per_quantity: Option<MoneyAmount>,

    /// Cost of the whole line.
    pub subtotal_amount: MoneyAmount,
}

/// A currency-agnostic decimal magnitude.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoneyAmount {
    /// The magnitude; the host encodes these as decimal strings.
    pub amount: Decimal,
}

/// The merchandise a cart line refers to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Merchandise {
    /// Product association, absent for non-product merchandise.
    #[serde(default)]
    pub product: Option<ProductRef>,
}

/// Product details relevant to eligibility.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    /// Whether the product belongs to any of the merchant-selected
    /// collections; resolved by the host before invocation.
    #[serde(default)]
    pub in_any_collection: bool,
}

/// One shipping option grouping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliveryGroup {
    /// Opaque group handle, echoed back in delivery discount targets.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn line(amount_per_quantity: Option<&str>, subtotal: &str) -> TestResult<CartLine> {
        let amount_per_quantity = match amount_per_quantity {
            Some(amount) => Some(MoneyAmount {
                amount: amount.parse()?,
            }),
            None => None,
        };

        Ok(CartLine {
            id: "gid://shop/CartLine/1".to_string(),
            quantity: 2,
            cost: LineCost {
                amount_per_quantity,
                subtotal_amount: MoneyAmount {
                    amount: subtotal.parse()?,
                },
            },
            merchandise: Merchandise { product: None },
        })
    }

    #[test]
    fn unit_cost_prefers_per_quantity_amount() -> TestResult {
        let line = line(Some("15.00"), "30.00")?;

        assert_eq!(line.unit_cost(), "15.00".parse()?);

        Ok(())
    }

    #[test]
    fn unit_cost_falls_back_to_subtotal() -> TestResult {
        let line = line(None, "30.00")?;

        assert_eq!(line.unit_cost(), "30.00".parse()?);

        Ok(())
    }

    #[test]
    fn cart_deserializes_from_host_json() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"{
                "lines": [{
                    "id": "gid://shop/CartLine/1",
                    "quantity": 3,
                    "cost": {
                        "amountPerQuantity": { "amount": "15.00" },
                        "subtotalAmount": { "amount": "45.00" }
                    },
                    "merchandise": { "product": { "inAnyCollection": true } }
                }],
                "deliveryGroups": [{ "id": "gid://shop/DeliveryGroup/1" }]
            }"#,
        )?;

        let Some(first) = cart.lines.first() else {
            panic!("expected one line, got {:?}", cart.lines);
        };

        assert_eq!(first.quantity, 3);
        assert_eq!(first.unit_cost(), "15.00".parse()?);
        assert!(first.merchandise.product.as_ref().is_some_and(|product| product.in_any_collection));
        assert_eq!(cart.delivery_groups.len(), 1);

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let cart: Cart = serde_json::from_str("{}")?;

        assert!(cart.lines.is_empty());
        assert!(cart.delivery_groups.is_empty());

        Ok(())
    }
}
