//! Operations
//!
//! The host-facing output of an evaluation, and the assemblers that build
//! it. Each invocation emits at most one operation per category; when
//! fixed-unit mode yields one candidate per line, those candidates are
//! grouped inside the single product operation and the selection strategy
//! tells the host how to arbitrate.

use serde::Serialize;
use tracing::warn;

use crate::{
    cart::DeliveryGroup,
    config::Configuration,
    eligibility::EligibleLine,
    value::{self, DiscountValue},
};

/// How the host arbitrates among multiple candidates within one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionStrategy {
    /// Apply the first applicable candidate.
    First,

    /// Apply every candidate.
    All,
}

/// One host-facing discount operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CartOperation {
    /// Add product-level discounts to cart lines.
    ProductDiscountsAdd(DiscountOperation),

    /// Add an order-level discount to the order subtotal.
    OrderDiscountsAdd(DiscountOperation),

    /// Add a shipping-level discount to a delivery group.
    DeliveryDiscountsAdd(DiscountOperation),
}

/// Candidate discounts plus the strategy for arbitrating among them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOperation {
    /// Candidate discounts offered to the host.
    pub candidates: Vec<Candidate>,

    /// How the host picks among the candidates.
    pub selection_strategy: SelectionStrategy,
}

/// One candidate discount within an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Human-readable message surfaced at checkout.
    pub message: String,

    /// Entities the candidate applies to.
    pub targets: Vec<Target>,

    /// Percentage or fixed-amount value.
    pub value: DiscountValue,
}

/// Entity a discount candidate applies to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    /// A single cart line.
    CartLine {
        /// Line handle from the cart snapshot.
        id: String,
    },

    /// The order subtotal.
    #[serde(rename_all = "camelCase")]
    OrderSubtotal {
        /// Lines excluded from the subtotal discount.
        excluded_cart_line_ids: Vec<String>,
    },

    /// A delivery group.
    DeliveryGroup {
        /// Group handle from the cart snapshot.
        id: String,
    },
}

/// Build the product operation for the selected lines, if one applies.
///
/// A zero (or negative) configured percentage suppresses the category
/// entirely rather than emitting a zero-value discount.
pub fn product_discount(
    selected: &[EligibleLine<'_>],
    configuration: &Configuration,
) -> Option<CartOperation> {
    if configuration.cart_line_percentage <= 0.0 || selected.is_empty() {
        return None;
    }

    let candidates = if configuration.discounts_fixed_quantity() {
        fixed_unit_candidates(selected, configuration)
    } else {
        whole_line_candidates(selected, configuration)
    };

    if candidates.is_empty() {
        return None;
    }

    Some(CartOperation::ProductDiscountsAdd(DiscountOperation {
        candidates,
        selection_strategy: SelectionStrategy::First,
    }))
}

/// Build the order operation, if one applies.
pub fn order_discount(configuration: &Configuration) -> Option<CartOperation> {
    if configuration.order_percentage <= 0.0 {
        return None;
    }

    let value = match value::percentage(configuration.order_percentage) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "skipping order discount");
            return None;
        }
    };

    Some(CartOperation::OrderDiscountsAdd(DiscountOperation {
        candidates: vec![Candidate {
            message: format!("{}% OFF ORDER", configuration.order_percentage),
            targets: vec![Target::OrderSubtotal {
                excluded_cart_line_ids: Vec::new(),
            }],
            value,
        }],
        selection_strategy: SelectionStrategy::First,
    }))
}

/// Build the delivery operation against the given group, if one applies.
pub fn delivery_discount(
    group: &DeliveryGroup,
    configuration: &Configuration,
) -> Option<CartOperation> {
    if configuration.delivery_percentage <= 0.0 {
        return None;
    }

    let value = match value::percentage(configuration.delivery_percentage) {
        Ok(value) => value,
        Err(error) => {
            warn!(%error, "skipping delivery discount");
            return None;
        }
    };

    Some(CartOperation::DeliveryDiscountsAdd(DiscountOperation {
        candidates: vec![Candidate {
            message: format!("{}% OFF DELIVERY", configuration.delivery_percentage),
            targets: vec![Target::DeliveryGroup {
                id: group.id.clone(),
            }],
            value,
        }],
        selection_strategy: SelectionStrategy::All,
    }))
}

/// One candidate per selected line, each with its own fixed amount.
fn fixed_unit_candidates(
    selected: &[EligibleLine<'_>],
    configuration: &Configuration,
) -> Vec<Candidate> {
    selected
        .iter()
        .filter_map(|eligible| {
            let value = value::fixed_unit_amount(
                eligible.unit_cost,
                configuration.quantity_to_discount,
                configuration.cart_line_percentage,
            );

            match value {
                Ok(value) => Some(Candidate {
                    message: format!(
                        "{}% OFF {} UNIT(S)",
                        configuration.cart_line_percentage, configuration.quantity_to_discount
                    ),
                    targets: vec![Target::CartLine {
                        id: eligible.line.id.clone(),
                    }],
                    value,
                }),
                Err(error) => {
                    warn!(%error, line = %eligible.line.id, "skipping fixed-unit candidate");
                    None
                }
            }
        })
        .collect()
}

/// A single candidate whose percentage spans every selected line.
fn whole_line_candidates(
    selected: &[EligibleLine<'_>],
    configuration: &Configuration,
) -> Vec<Candidate> {
    let targets = selected
        .iter()
        .map(|eligible| Target::CartLine {
            id: eligible.line.id.clone(),
        })
        .collect();

    match value::percentage(configuration.cart_line_percentage) {
        Ok(value) => vec![Candidate {
            message: format!("{}% OFF PRODUCT", configuration.cart_line_percentage),
            targets,
            value,
        }],
        Err(error) => {
            warn!(%error, "skipping product discount");
            Vec::new()
        }
    }
}
