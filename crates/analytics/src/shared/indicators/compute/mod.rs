pub mod churn;
pub mod drilldown;
pub mod goal;
pub mod growth;
pub mod kpi;
pub mod ranking;

/// Replace NaN and infinities with zero so a malformed figure never poisons
/// the rest of a dashboard.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!("non-finite figure {value} replaced by 0");
        0.0
    }
}
