use chrono::NaiveDate;
use contracts::dashboards::d102_customer_churn::{ChurnReport, ChurnView};

use crate::shared::indicators::compute::churn;

/// Build the churn table for the threshold the user currently has selected.
pub fn build_churn_view(report: &ChurnReport, requested_threshold: u32, today: NaiveDate) -> ChurnView {
    let stale = churn::needs_refetch(Some(report.threshold_months), requested_threshold);
    if stale {
        tracing::warn!(
            "churn data classified at {} months, {} requested: re-request required",
            report.threshold_months,
            requested_threshold
        );
    }

    let rows = churn::reconcile(report, today);
    ChurnView {
        threshold_months: report.threshold_months,
        stale,
        total_at_risk: rows.len(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d102_customer_churn::ChurnEntry;

    fn report(threshold: u32) -> ChurnReport {
        ChurnReport {
            threshold_months: threshold,
            entries: vec![ChurnEntry {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                last_purchase_date: NaiveDate::from_ymd_opt(2026, 7, 21).unwrap(),
                days_inactive: 90,
            }],
        }
    }

    #[test]
    fn test_build_matching_threshold() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let view = build_churn_view(&report(3), 3, today);
        assert!(!view.stale);
        assert_eq!(view.total_at_risk, 1);
        assert!(view.rows[0].consistent);
        assert_eq!(view.rows[0].label, "90 days");
    }

    #[test]
    fn test_build_after_threshold_change_is_stale() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let view = build_churn_view(&report(3), 6, today);
        assert!(view.stale);
        assert_eq!(view.threshold_months, 3);
    }
}
