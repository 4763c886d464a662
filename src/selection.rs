//! Selection
//!
//! Narrows the eligible lines according to the configured selection
//! strategy. Delivery discounts need no counterpart here: they always
//! target the first delivery group only.

use crate::eligibility::EligibleLine;

/// Collapse the eligible lines to the single cheapest one when asked.
///
/// The sort ascends by per-unit cost and is stable, so lines with equal
/// unit costs keep their cart order and the earliest one wins. An empty
/// input stays empty; that is a valid "no candidates" outcome, not an
/// error.
pub fn cheapest_only(mut eligible: Vec<EligibleLine<'_>>, apply: bool) -> Vec<EligibleLine<'_>> {
    if !apply {
        return eligible;
    }

    eligible.sort_by(|a, b| a.unit_cost.cmp(&b.unit_cost));
    eligible.truncate(1);
    eligible
}
