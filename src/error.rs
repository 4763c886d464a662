//! Errors
//!
//! Only the fatal preconditions live here; every other anomaly is
//! absorbed into "no operation produced" by the assemblers.

use thiserror::Error;

/// Fatal preconditions that abort an evaluation before any computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvaluationError {
    /// The cart has no lines, so line discounts cannot be evaluated.
    /// The host must treat this as a failure, not an empty result.
    #[error("no cart lines found")]
    EmptyCart,

    /// The cart has no delivery groups, so delivery discounts cannot be
    /// evaluated.
    #[error("no delivery groups found")]
    NoDeliveryGroups,
}
