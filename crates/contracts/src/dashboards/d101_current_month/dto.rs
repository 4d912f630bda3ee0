use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::indicators::{IndicatorValue, NormalizedItem};

fn default_top_n() -> usize {
    10
}

/// Month-to-date payload as delivered by the reporting backend
///
/// Missing figures read as zero and missing lists as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentMonthPayload {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub average_ticket: f64,
    /// Days of the month already elapsed, today included
    #[serde(default)]
    pub elapsed_days: Option<u32>,
    #[serde(default)]
    pub remaining_days: Option<u32>,
    /// Month in format "MM/YYYY"
    #[serde(default)]
    pub month_label: String,
    #[serde(default)]
    pub daily_sales: Vec<DailySales>,
    /// Revenue per category, descending
    #[serde(default)]
    pub categories: Vec<SegmentTotal>,
    /// Revenue per payment method, descending
    #[serde(default)]
    pub payment_methods: Vec<SegmentTotal>,
    #[serde(default)]
    pub products: CategoryProductMap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub revenue: f64,
}

/// Revenue of one slice of the month (a category, a payment method)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentTotal {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub revenue: f64,
}

/// Segment revenue with its share of the month total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentShare {
    pub name: String,
    pub revenue: f64,
    pub percent: f64,
}

/// Product row of a category or global ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub revenue: f64,
}

/// Ranked products per category plus the overall top list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProductMap {
    #[serde(default)]
    pub by_category: HashMap<String, Vec<ProductEntry>>,
    #[serde(default)]
    pub global_top: Vec<ProductEntry>,
    /// Size the backend truncated `global_top` to
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for CategoryProductMap {
    fn default() -> Self {
        Self {
            by_category: HashMap::new(),
            global_top: Vec::new(),
            top_n: default_top_n(),
        }
    }
}

/// Product list resolved for the current category selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillDownResult {
    pub title: String,
    pub items: Vec<ProductEntry>,
}

/// Month-to-date progress against the user's goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthProgress {
    pub elapsed_days: u32,
    pub remaining_days: u32,
    pub current_revenue: f64,
    pub monthly_goal: f64,
}

/// What the required daily pace means for the consuming layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaceStatus {
    /// Revenue already covers the goal
    GoalMet,
    /// A positive pace over the remaining days closes the gap
    Required,
    /// Goal missed and no days remain; `required_daily_pace` is reported as 0
    PeriodOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub daily_average: f64,
    pub month_end_projection: f64,
    /// True percentage, may exceed 100
    pub goal_percent: f64,
    /// Bounded to 100, for progress bars only
    pub goal_percent_clamped: f64,
    pub shortfall: f64,
    pub required_daily_pace: f64,
    pub pace: PaceStatus,
}

/// Current month dashboard ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentMonthView {
    pub month_label: String,
    pub total_revenue: f64,
    pub total_orders: u64,
    pub average_ticket: f64,
    pub progress: MonthProgress,
    pub projection: GoalProjection,
    /// Goal cards: percent reached, month-end projection, required pace
    pub indicators: Vec<IndicatorValue>,
    pub daily_sales: Vec<DailySales>,
    pub categories: Vec<SegmentShare>,
    pub payment_methods: Vec<SegmentShare>,
    pub selected_category: Option<String>,
    pub drill_down: DrillDownResult,
    /// `drill_down.items` with bar widths
    pub drill_down_bars: Vec<NormalizedItem<ProductEntry>>,
}
