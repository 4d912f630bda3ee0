use contracts::dashboards::d100_sales_overview::SalesOverviewPayload;
use contracts::dashboards::d101_current_month::CurrentMonthPayload;
use contracts::dashboards::d102_customer_churn::ChurnReport;
use contracts::dashboards::d103_advanced::AdvancedPayload;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::PayloadError;

/// One reporting-backend response, tagged by the dashboard it feeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardPayload {
    SalesOverview(SalesOverviewPayload),
    CurrentMonth(CurrentMonthPayload),
    CustomerChurn(ChurnReport),
    Advanced(AdvancedPayload),
}

pub fn parse_payload(path: &Path, contents: &str) -> Result<DashboardPayload, PayloadError> {
    serde_json::from_str(contents).map_err(|source| PayloadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_payload(path: PathBuf) -> Result<DashboardPayload, PayloadError> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| PayloadError::Io {
            path: path.clone(),
            source,
        })?;
    parse_payload(&path, &contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sales_overview() {
        let json = r#"{
            "kind": "sales_overview",
            "current": {"revenue": 1500.0, "order_count": 6, "average_ticket": 250.0},
            "timeline": [{"label": "Jan", "prior_value": 100.0, "current_value": 120.0}]
        }"#;
        match parse_payload(Path::new("overview.json"), json).unwrap() {
            DashboardPayload::SalesOverview(p) => {
                assert_eq!(p.current.order_count, 6);
                assert!(p.prior.is_none());
                assert_eq!(p.timeline.len(), 1);
                assert!(p.product_ranking.is_empty());
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_current_month_defaults() {
        let json = r#"{
            "kind": "current_month",
            "total_revenue": 10000.0,
            "total_orders": 40,
            "average_ticket": 250.0,
            "month_label": "10/2026",
            "products": {"global_top": [{"name": "Suit", "quantity": 3, "revenue": 2400.0}]}
        }"#;
        match parse_payload(Path::new("month.json"), json).unwrap() {
            DashboardPayload::CurrentMonth(p) => {
                assert!(p.elapsed_days.is_none());
                assert_eq!(p.products.top_n, 10);
                assert_eq!(p.products.global_top[0].quantity, 3.0);
                assert!(p.products.by_category.is_empty());
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_churn() {
        let json = r#"{
            "kind": "customer_churn",
            "threshold_months": 6,
            "entries": [{"name": "Ana", "email": "ana@example.com",
                         "last_purchase_date": "2026-01-10", "days_inactive": 282}]
        }"#;
        match parse_payload(Path::new("churn.json"), json).unwrap() {
            DashboardPayload::CustomerChurn(r) => {
                assert_eq!(r.threshold_months, 6);
                assert_eq!(r.entries[0].days_inactive, 282);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_sales_overview_missing_figures() {
        let json = r#"{"kind":"sales_overview","current":{"revenue":1500.0,"order_count":6}}"#;
        match parse_payload(Path::new("overview.json"), json).unwrap() {
            DashboardPayload::SalesOverview(p) => {
                assert_eq!(p.current.revenue, 1500.0);
                assert_eq!(p.current.average_ticket, 0.0);
                assert!(p.ticket_by_category.is_empty());
            }
            other => panic!("unexpected payload {other:?}"),
        }

        let bare = parse_payload(Path::new("overview.json"), r#"{"kind":"sales_overview"}"#);
        assert!(matches!(bare, Ok(DashboardPayload::SalesOverview(_))));
    }

    #[test]
    fn test_parse_current_month_without_products() {
        let json = r#"{"kind": "current_month", "total_revenue": 4200.0, "month_label": "10/2026"}"#;
        match parse_payload(Path::new("month.json"), json).unwrap() {
            DashboardPayload::CurrentMonth(p) => {
                assert_eq!(p.total_orders, 0);
                assert_eq!(p.products.top_n, 10);
                assert!(p.products.global_top.is_empty());
                assert!(p.payment_methods.is_empty());
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_churn_without_threshold() {
        let json = r#"{"kind": "customer_churn",
                       "entries": [{"name": "Ana", "last_purchase_date": "2026-01-10"}]}"#;
        match parse_payload(Path::new("churn.json"), json).unwrap() {
            DashboardPayload::CustomerChurn(r) => {
                assert_eq!(r.threshold_months, 0);
                assert_eq!(r.entries[0].email, "");
                assert_eq!(r.entries[0].days_inactive, 0);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_advanced() {
        let json = r#"{
            "kind": "advanced",
            "sales_by_state": [{"state": "SP", "revenue": 9000.0}],
            "product_variations": [{"name": "Suit", "variation": "Navy / 48", "quantity": 3}]
        }"#;
        match parse_payload(Path::new("advanced.json"), json).unwrap() {
            DashboardPayload::Advanced(p) => {
                assert_eq!(p.sales_by_state[0].state, "SP");
                assert_eq!(p.product_variations[0].variation.as_deref(), Some("Navy / 48"));
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_payload(Path::new("broken.json"), "{").unwrap_err();
        assert!(matches!(err, PayloadError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = parse_payload(Path::new("x.json"), r#"{"kind": "pivot"}"#).unwrap_err();
        assert!(matches!(err, PayloadError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_payload(PathBuf::from("does/not/exist.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, PayloadError::Io { .. }));
    }
}
