use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in the catalogue and KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour and arrow direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Static metadata describing one indicator (label, format, icon, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub short_label: Option<String>,
    pub icon: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

/// Metadata for a group of indicators rendered together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSetMeta {
    pub id: String,
    pub label: String,
    pub indicators: Vec<IndicatorId>,
    /// Number of columns in the card grid (2, 3, 4).
    pub columns: u8,
}

/// Full catalogue of known indicators and sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalog {
    pub indicators: Vec<IndicatorMeta>,
    pub sets: Vec<IndicatorSetMeta>,
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

/// Percentage change between a prior and a current figure, whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub percent: i64,
}

/// One tick of a comparative time series (e.g. one month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPoint {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub prior_value: f64,
    #[serde(default)]
    pub current_value: f64,
}

/// A `PeriodPoint` with its growth attached, flattened for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    #[serde(flatten)]
    pub point: PeriodPoint,
    #[serde(flatten)]
    pub growth: GrowthResult,
}

// ---------------------------------------------------------------------------
// Headline KPIs
// ---------------------------------------------------------------------------

/// Raw headline figures for one period as reported by the backend.
///
/// Missing figures read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiFigures {
    pub revenue: f64,
    pub order_count: u64,
    pub average_ticket: f64,
}

/// Headline KPIs with optional growth against the prior period.
///
/// Growth fields are omitted entirely (not zeroed) when no prior period was
/// available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub revenue: f64,
    pub order_count: u64,
    pub average_ticket: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<GrowthResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_growth: Option<GrowthResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_growth: Option<GrowthResult>,
}

/// A single KPI card value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub value: f64,
    /// Value for the previous comparable period.
    pub previous_value: Option<f64>,
    pub growth: Option<GrowthResult>,
    pub status: IndicatorStatus,
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// A ranked row annotated with its share of the list maximum, in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem<T> {
    #[serde(flatten)]
    pub item: T,
    pub share_of_max: f64,
}
