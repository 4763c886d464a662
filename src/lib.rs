//! Tiller
//!
//! Tiller is a deterministic discount computation engine for shopping
//! carts. Given a cart snapshot and a merchant-configured discount
//! definition, it produces the discount operations to apply (which lines,
//! subtotal or delivery group receive which discount, and by how much), or
//! an empty result when the discount does not apply. It performs no I/O
//! and owns no state across invocations.

pub mod cart;
pub mod config;
pub mod discount;
pub mod eligibility;
pub mod error;
pub mod evaluate;
pub mod operations;
pub mod prelude;
pub mod selection;
pub mod value;
