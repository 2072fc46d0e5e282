//! Quote request entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use conveyor_core::types::QuoteId;

use super::bom::BomItem;
use crate::configuration::{ConveyorType, OverheadConfig, RollerConfig};

/// A customer request for a price on a configured conveyor.
///
/// `id` and `submitted_at` are assigned by the quote service; values sent
/// by the client are overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub id: Option<QuoteId>,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "contact is required"))]
    pub contact: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub conveyor_type: ConveyorType,
    #[serde(default)]
    #[validate(nested)]
    pub roller_configuration: Option<RollerConfig>,
    #[serde(default)]
    #[validate(nested)]
    pub overhead_configuration: Option<OverheadConfig>,
    #[serde(default)]
    pub bom_items: Option<Vec<BomItem>>,
    #[serde(default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Sum of all bill of materials lines.
    pub fn bom_total(&self) -> f64 {
        self.bom_items
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(BomItem::total_price)
            .sum()
    }
}

fn default_quantity() -> i32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QuoteRequest {
        serde_json::from_value(serde_json::json!({
            "company": "Acme",
            "contact": "Sam",
            "email": "sam@acme.example",
            "conveyorType": "overhead",
            "overheadConfiguration": { "trackLength": 12000 }
        }))
        .expect("parse")
    }

    #[test]
    fn test_defaults_applied() {
        let quote = sample();
        assert_eq!(quote.quantity, 1);
        assert!(quote.id.is_none());
        assert_eq!(quote.conveyor_type, ConveyorType::Overhead);
        assert!(quote.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut quote = sample();
        quote.email = "not-an-email".to_string();
        assert!(quote.validate().is_err());
    }

    #[test]
    fn test_nested_configuration_is_validated() {
        let mut quote = sample();
        if let Some(config) = quote.overhead_configuration.as_mut() {
            config.drive_units = 0;
        }
        assert!(quote.validate().is_err());
    }

    #[test]
    fn test_bom_total() {
        let mut quote = sample();
        quote.bom_items = Some(vec![
            BomItem {
                category: "Trolleys".into(),
                part_number: "24.010".into(),
                description: String::new(),
                quantity: 2,
                unit_price: 10.0,
                can_swap: false,
                alternative_part_numbers: vec![],
            },
            BomItem {
                category: "Bends".into(),
                part_number: "24.090".into(),
                description: String::new(),
                quantity: 1,
                unit_price: 30.0,
                can_swap: true,
                alternative_part_numbers: vec!["24.091".into()],
            },
        ]);
        assert_eq!(quote.bom_total(), 50.0);
    }
}
