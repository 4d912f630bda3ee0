use serde::{Deserialize, Serialize};

use crate::shared::indicators::NormalizedItem;

/// Segmentation payload for the advanced tab, lists ordered descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedPayload {
    pub sales_by_state: Vec<StateSales>,
    pub product_variations: Vec<VariationEntry>,
}

/// Revenue for one state (two-letter code)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSales {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub revenue: f64,
}

/// Units sold of one product variation (size / colour)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationEntry {
    #[serde(default)]
    pub name: String,
    /// e.g. "Navy / 48"
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationRow {
    /// "Name [variation]", or just the name
    pub label: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedView {
    pub sales_by_state: Vec<NormalizedItem<StateSales>>,
    pub product_variations: Vec<NormalizedItem<VariationRow>>,
}
