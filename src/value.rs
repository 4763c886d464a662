//! Discount Values
//!
//! Computes the value attached to a discount candidate: either a
//! percentage the host applies itself, or a pre-computed fixed amount for
//! the "N discounted units" mode.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

/// Errors specific to discount value calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A configured percentage could not be represented as a decimal, or
    /// the amount arithmetic overflowed.
    #[error("percentage conversion overflowed or was not finite")]
    PercentConversion,
}

/// The value attached to a discount candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountValue {
    /// A percentage applied by the host to the targeted portion.
    Percentage {
        /// Percentage magnitude (0-100).
        value: Decimal,
    },

    /// A pre-computed fixed amount.
    FixedAmount {
        /// Amount in the cart's currency, always at two decimal places.
        amount: Decimal,
    },
}

/// Percentage value for a candidate, converted from the configured magnitude.
///
/// # Errors
///
/// - [`ValueError::PercentConversion`]: the percentage is not finite.
pub fn percentage(value: f64) -> Result<DiscountValue, ValueError> {
    Ok(DiscountValue::Percentage {
        value: to_decimal(value)?,
    })
}

/// Fixed amount for "N discounted units".
///
/// amount = unit cost x configured units x (percentage / 100), rounded
/// half-up to two decimal places. The amount derives from the configured
/// unit count, not the line quantity, so it caps at the configured number
/// of units no matter how many are actually on the line.
///
/// # Errors
///
/// - [`ValueError::PercentConversion`]: the percentage is not finite, or
///   the multiplication overflowed the decimal range.
pub fn fixed_unit_amount(
    unit_cost: Decimal,
    quantity_to_discount: u64,
    percentage: f64,
) -> Result<DiscountValue, ValueError> {
    let percent = to_decimal(percentage)?;
    let units = Decimal::from(quantity_to_discount);

    let amount = unit_cost
        .checked_mul(units)
        .and_then(|amount| amount.checked_mul(percent))
        .and_then(|amount| amount.checked_div(Decimal::ONE_HUNDRED))
        .ok_or(ValueError::PercentConversion)?;

    let mut amount = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(2);

    Ok(DiscountValue::FixedAmount { amount })
}

fn to_decimal(percentage: f64) -> Result<Decimal, ValueError> {
    Decimal::from_f64_retain(percentage).ok_or(ValueError::PercentConversion)
}
