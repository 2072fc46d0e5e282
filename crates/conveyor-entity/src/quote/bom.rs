//! Bill of materials line attached to a quote.

use serde::{Deserialize, Serialize};

/// One line of the bill of materials a customer sends with a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BomItem {
    pub category: String,
    pub part_number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub unit_price: f64,
    /// Whether the customer accepts an equivalent part.
    #[serde(default)]
    pub can_swap: bool,
    #[serde(default)]
    pub alternative_part_numbers: Vec<String>,
}

impl BomItem {
    /// Line total: quantity × unit price.
    pub fn total_price(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

fn default_quantity() -> i32 {
    1
}
