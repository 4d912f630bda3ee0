use serde::{Deserialize, Serialize};

use crate::shared::indicators::{
    AnnotatedPoint, IndicatorValue, KpiFigures, KpiSummary, NormalizedItem, PeriodPoint,
};

/// Sales overview payload as delivered by the reporting backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewPayload {
    /// Headline figures for the selected period
    #[serde(default)]
    pub current: KpiFigures,
    /// Same figures for the preceding period of equal length, when available
    #[serde(default)]
    pub prior: Option<KpiFigures>,
    /// Month-by-month revenue, selected year vs the year before
    #[serde(default)]
    pub timeline: Vec<PeriodPoint>,
    /// Products ordered by units sold, descending
    #[serde(default)]
    pub product_ranking: Vec<RankingEntry>,
    #[serde(default)]
    pub ticket_by_category: Vec<CategoryTicket>,
}

/// Product row of the units-sold ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    #[serde(default)]
    pub name: String,
    /// SKU / derivation code
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub quantity: f64,
}

/// Average ticket per category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTicket {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ticket: f64,
}

/// Sales overview ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOverviewView {
    pub kpis: KpiSummary,
    /// KPI cards in display order
    pub indicators: Vec<IndicatorValue>,
    pub timeline: Vec<AnnotatedPoint>,
    pub product_ranking: Vec<NormalizedItem<RankingEntry>>,
    pub ticket_by_category: Vec<CategoryTicket>,
}
