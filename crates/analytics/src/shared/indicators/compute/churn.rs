use chrono::NaiveDate;
use contracts::dashboards::d102_customer_churn::{ChurnReport, ChurnRow};

/// Allowed drift, in days, between the backend's `days_inactive` and the one
/// re-derived here. The backend counts from its own clock at fetch time.
pub const DAYS_INACTIVE_TOLERANCE: u64 = 1;

/// Whether churn data fetched for `fetched_threshold` is stale for `requested`.
///
/// Bucket membership is never re-derived locally: any threshold change, or no
/// data at all, means a new request.
pub fn needs_refetch(fetched_threshold: Option<u32>, requested_threshold: u32) -> bool {
    fetched_threshold != Some(requested_threshold)
}

/// Whole days between the last purchase and `today`, never negative.
pub fn days_since(last_purchase: NaiveDate, today: NaiveDate) -> i64 {
    (today - last_purchase).num_days().max(0)
}

/// Table rows for a churn report, flagging rows whose reported inactivity does
/// not match their last purchase date.
pub fn reconcile(report: &ChurnReport, today: NaiveDate) -> Vec<ChurnRow> {
    report
        .entries
        .iter()
        .map(|entry| {
            let derived = days_since(entry.last_purchase_date, today);
            let consistent = derived.abs_diff(entry.days_inactive) <= DAYS_INACTIVE_TOLERANCE;
            if !consistent {
                tracing::warn!(
                    "churn row {}: backend reports {} days inactive, last purchase {} gives {}",
                    entry.email,
                    entry.days_inactive,
                    entry.last_purchase_date,
                    derived
                );
            }
            ChurnRow {
                name: entry.name.clone(),
                email: entry.email.clone(),
                last_purchase_date: entry.last_purchase_date,
                days_inactive: entry.days_inactive,
                label: format!("{} days", entry.days_inactive),
                consistent,
            }
        })
        .collect()
}
