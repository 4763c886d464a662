//! Discount
//!
//! Metadata attached to the discount definition under evaluation: which
//! discount classes it may emit, and the merchant's configuration blob.

use serde::Deserialize;

/// Categories a discount definition may emit operations for.
///
/// Evaluators never produce an operation for a class that is not present
/// on the definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountClass {
    /// Product-level discounts against individual cart lines.
    Product,

    /// Order-level discounts against the order subtotal.
    Order,

    /// Shipping-level discounts against a delivery group.
    Shipping,
}

/// The discount definition as the host presents it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    /// Classes this definition is allowed to emit.
    #[serde(default)]
    pub discount_classes: Vec<DiscountClass>,

    /// Merchant-authored configuration blob, when one is attached.
    #[serde(default)]
    pub metafield: Option<Metafield>,
}

impl Discount {
    /// Whether the definition carries the given class.
    pub fn has_class(&self, class: DiscountClass) -> bool {
        self.discount_classes.contains(&class)
    }
}

/// Opaque serialized configuration attached to a discount definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metafield {
    /// The serialized configuration; decoded by [`crate::config`].
    pub value: String,
}
