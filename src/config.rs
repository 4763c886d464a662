//! Configuration
//!
//! Merchant-authored discount configuration, decoded fresh on every
//! invocation from the definition's metafield blob. Decoding never fails
//! outward: a corrupt or missing blob degrades to the all-zero default so
//! the discount computes to nothing instead of aborting the checkout.

use serde::Deserialize;
use tracing::warn;

use crate::discount::Metafield;

/// Fully-defaulted merchant configuration.
///
/// The zero/empty values are deliberate sentinels with named policy
/// accessors below, not implicit falsy checks.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Percentage applied to eligible cart lines (0-100).
    pub cart_line_percentage: f64,

    /// Percentage applied to the order subtotal (0-100).
    pub order_percentage: f64,

    /// Percentage applied to the first delivery group (0-100).
    pub delivery_percentage: f64,

    /// Collections restricting line eligibility; empty means unrestricted.
    pub collection_ids: Vec<String>,

    /// Discount only the cheapest eligible line.
    pub apply_to_cheapest_line_only: bool,

    /// Minimum line quantity for eligibility; 0 means no minimum.
    pub minimum_quantity: u64,

    /// Number of units discounted at a fixed amount; 0 means the
    /// percentage applies to the whole eligible line instead.
    pub quantity_to_discount: u64,
}

impl Configuration {
    /// Decode the metafield blob, degrading to the default on any failure.
    ///
    /// The decode is strict: a single wrong-typed field rejects the whole
    /// blob. Failures are logged to the tracing sink and absorbed.
    pub fn parse(metafield: Option<&Metafield>) -> Self {
        let Some(metafield) = metafield else {
            warn!("discount has no configuration metafield; using defaults");
            return Self::default();
        };

        match serde_json::from_str(&metafield.value) {
            Ok(configuration) => configuration,
            Err(error) => {
                warn!(%error, "failed to parse configuration metafield; using defaults");
                Self::default()
            }
        }
    }

    /// Whether eligibility is restricted to merchant-selected collections.
    pub fn restricts_collections(&self) -> bool {
        !self.collection_ids.is_empty()
    }

    /// Whether lines must meet a minimum quantity to be eligible.
    pub fn requires_minimum_quantity(&self) -> bool {
        self.minimum_quantity > 0
    }

    /// Whether a fixed number of units is discounted per selected line,
    /// rather than a percentage of the whole line.
    pub fn discounts_fixed_quantity(&self) -> bool {
        self.quantity_to_discount > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metafield(value: &str) -> Metafield {
        Metafield {
            value: value.to_string(),
        }
    }

    #[test]
    fn parses_a_complete_blob() {
        let configuration = Configuration::parse(Some(&metafield(
            r#"{
                "cartLinePercentage": 10,
                "orderPercentage": 5,
                "deliveryPercentage": 2.5,
                "collectionIds": ["gid://shop/Collection/1"],
                "applyToCheapestLineOnly": true,
                "minimumQuantity": 2,
                "quantityToDiscount": 1
            }"#,
        )));

        assert_eq!(configuration.cart_line_percentage, 10.0);
        assert_eq!(configuration.order_percentage, 5.0);
        assert_eq!(configuration.delivery_percentage, 2.5);
        assert_eq!(configuration.collection_ids, vec!["gid://shop/Collection/1"]);
        assert!(configuration.apply_to_cheapest_line_only);
        assert_eq!(configuration.minimum_quantity, 2);
        assert_eq!(configuration.quantity_to_discount, 1);
    }

    #[test]
    fn missing_fields_default() {
        let configuration =
            Configuration::parse(Some(&metafield(r#"{ "cartLinePercentage": 15 }"#)));

        assert_eq!(configuration.cart_line_percentage, 15.0);
        assert_eq!(configuration.order_percentage, 0.0);
        assert!(configuration.collection_ids.is_empty());
        assert!(!configuration.apply_to_cheapest_line_only);
    }

    #[test]
    fn malformed_blob_degrades_to_default() {
        let configuration = Configuration::parse(Some(&metafield("not json at all")));

        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn wrong_typed_field_rejects_the_whole_blob() {
        let configuration = Configuration::parse(Some(&metafield(
            r#"{ "cartLinePercentage": 10, "minimumQuantity": "two" }"#,
        )));

        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn missing_metafield_degrades_to_default() {
        let configuration = Configuration::parse(None);

        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn zero_and_empty_sentinels_read_as_policies() {
        let unrestricted = Configuration::default();

        assert!(!unrestricted.restricts_collections());
        assert!(!unrestricted.requires_minimum_quantity());
        assert!(!unrestricted.discounts_fixed_quantity());

        let restricted = Configuration {
            collection_ids: vec!["gid://shop/Collection/1".to_string()],
            minimum_quantity: 3,
            quantity_to_discount: 2,
            ..Configuration::default()
        };

        assert!(restricted.restricts_collections());
        assert!(restricted.requires_minimum_quantity());
        assert!(restricted.discounts_fixed_quantity());
    }
}
