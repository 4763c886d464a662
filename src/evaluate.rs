//! Evaluation
//!
//! The two entry points composing the engine. Each run is stateless and
//! single-shot: Parse -> Filter -> Select -> Compute -> Assemble. The only
//! terminal outcomes are a (possibly empty) operations list or a fatal
//! precondition failure raised before any computation begins. Identical
//! input always yields structurally identical output; the host relies on
//! that for caching and retry safety.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    cart::Cart,
    config::Configuration,
    discount::{Discount, DiscountClass},
    eligibility::eligible_lines,
    error::EvaluationError,
    operations::{self, CartOperation},
    selection::cheapest_only,
};

/// Everything an evaluator consumes, read-only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionInput {
    /// The cart snapshot.
    pub cart: Cart,

    /// The discount definition under evaluation.
    pub discount: Discount,
}

/// The ordered operations produced by an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionResult {
    /// At most one operation per discount category; possibly empty.
    pub operations: Vec<CartOperation>,
}

impl FunctionResult {
    fn empty() -> Self {
        Self {
            operations: Vec::new(),
        }
    }
}

/// Produce product- and order-level discount operations from cart lines.
///
/// Product discounts are assembled first, then order discounts; each
/// category fires only when its class is present on the definition and
/// its configured percentage is above zero.
///
/// # Errors
///
/// - [`EvaluationError::EmptyCart`]: the cart has no lines.
pub fn cart_lines(input: &FunctionInput) -> Result<FunctionResult, EvaluationError> {
    if input.cart.lines.is_empty() {
        return Err(EvaluationError::EmptyCart);
    }

    let configuration = Configuration::parse(input.discount.metafield.as_ref());

    let has_product_class = input.discount.has_class(DiscountClass::Product);
    let has_order_class = input.discount.has_class(DiscountClass::Order);

    if !has_product_class && !has_order_class {
        debug!("no product or order class on the definition");
        return Ok(FunctionResult::empty());
    }

    let mut operations = Vec::new();

    if has_product_class {
        let eligible = eligible_lines(&input.cart.lines, &configuration);
        let selected = cheapest_only(eligible, configuration.apply_to_cheapest_line_only);

        operations.extend(operations::product_discount(&selected, &configuration));
    }

    if has_order_class {
        operations.extend(operations::order_discount(&configuration));
    }

    debug!(operations = operations.len(), "cart lines evaluation complete");

    Ok(FunctionResult { operations })
}

/// Produce the shipping-level discount operation from delivery groups.
///
/// Only the first delivery group is ever targeted; multi-group selection
/// is unsupported.
///
/// # Errors
///
/// - [`EvaluationError::NoDeliveryGroups`]: the cart has no delivery
///   groups.
pub fn delivery(input: &FunctionInput) -> Result<FunctionResult, EvaluationError> {
    let first_group = input
        .cart
        .delivery_groups
        .first()
        .ok_or(EvaluationError::NoDeliveryGroups)?;

    if !input.discount.has_class(DiscountClass::Shipping) {
        debug!("no shipping class on the definition");
        return Ok(FunctionResult::empty());
    }

    let configuration = Configuration::parse(input.discount.metafield.as_ref());

    let operations = operations::delivery_discount(first_group, &configuration)
        .into_iter()
        .collect();

    Ok(FunctionResult { operations })
}
