//! Tiller prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine, DeliveryGroup, LineCost, Merchandise, MoneyAmount, ProductRef},
    config::Configuration,
    discount::{Discount, DiscountClass, Metafield},
    eligibility::{EligibleLine, eligible_lines},
    error::EvaluationError,
    evaluate::{FunctionInput, FunctionResult, cart_lines, delivery},
    operations::{Candidate, CartOperation, DiscountOperation, SelectionStrategy, Target},
    selection::cheapest_only,
    value::{DiscountValue, ValueError},
};
