use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inactive customers, pre-classified by the backend against `threshold_months`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnReport {
    /// 0 when missing, which never matches a requested threshold
    #[serde(default)]
    pub threshold_months: u32,
    #[serde(default)]
    pub entries: Vec<ChurnEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub last_purchase_date: NaiveDate,
    #[serde(default)]
    pub days_inactive: i64,
}

/// Churn table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnRow {
    pub name: String,
    pub email: String,
    pub last_purchase_date: NaiveDate,
    pub days_inactive: i64,
    /// e.g. "120 days"
    pub label: String,
    /// `days_inactive` agrees with the last purchase date
    pub consistent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnView {
    pub threshold_months: u32,
    /// Rows were classified for a different threshold than the one requested
    pub stale: bool,
    pub total_at_risk: usize,
    pub rows: Vec<ChurnRow>,
}
