//! Eligibility
//!
//! Decides which cart lines qualify for a line discount. A line qualifies
//! when its merchandise carries a product association, the collection
//! restriction passes, and the line meets any configured minimum quantity.
//! Cart order is preserved; narrowing policies live in [`crate::selection`].

use rust_decimal::Decimal;

use crate::{
    cart::{CartLine, ProductRef},
    config::Configuration,
};

/// A cart line that qualifies for a line discount.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleLine<'a> {
    /// The underlying cart line.
    pub line: &'a CartLine,

    /// Per-unit cost used for selection and fixed-unit amounts.
    pub unit_cost: Decimal,

    /// Units on the line.
    pub quantity: u64,
}

/// Filter cart lines down to those qualifying for a line discount.
pub fn eligible_lines<'a>(
    lines: &'a [CartLine],
    configuration: &Configuration,
) -> Vec<EligibleLine<'a>> {
    lines
        .iter()
        .filter(|line| is_eligible(line, configuration))
        .map(|line| EligibleLine {
            line,
            unit_cost: line.unit_cost(),
            quantity: line.quantity,
        })
        .collect()
}

fn is_eligible(line: &CartLine, configuration: &Configuration) -> bool {
    let Some(product) = line.merchandise.product.as_ref() else {
        return false;
    };

    passes_collection_restriction(product, configuration)
        && meets_minimum_quantity(line.quantity, configuration)
}

/// An empty restriction set means every product qualifies.
fn passes_collection_restriction(product: &ProductRef, configuration: &Configuration) -> bool {
    !configuration.restricts_collections() || product.in_any_collection
}

/// A minimum of zero means no minimum at all.
fn meets_minimum_quantity(quantity: u64, configuration: &Configuration) -> bool {
    !configuration.requires_minimum_quantity() || quantity >= configuration.minimum_quantity
}
