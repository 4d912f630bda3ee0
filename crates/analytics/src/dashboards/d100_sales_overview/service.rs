use contracts::dashboards::d100_sales_overview::{SalesOverviewPayload, SalesOverviewView};

use crate::shared::indicators::compute::{growth, kpi, ranking};

/// Build the sales overview: KPI cards with growth, year-over-year timeline
/// and the units-sold ranking with bar widths.
pub fn build_sales_overview(payload: &SalesOverviewPayload) -> SalesOverviewView {
    let prior = payload.prior.as_ref();
    let kpis = kpi::annotate(&payload.current, prior);
    let indicators = kpi::indicator_values(&kpis, prior);

    tracing::info!(
        "Sales overview: {} timeline points, {} ranked products",
        payload.timeline.len(),
        payload.product_ranking.len()
    );

    SalesOverviewView {
        kpis,
        indicators,
        timeline: growth::annotate_series(&payload.timeline),
        product_ranking: ranking::normalize(&payload.product_ranking),
        ticket_by_category: payload.ticket_by_category.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_sales_overview::{CategoryTicket, RankingEntry};
    use contracts::shared::indicators::{IndicatorStatus, KpiFigures, PeriodPoint};

    fn payload(prior: Option<KpiFigures>) -> SalesOverviewPayload {
        SalesOverviewPayload {
            current: KpiFigures {
                revenue: 15000.0,
                order_count: 60,
                average_ticket: 250.0,
            },
            prior,
            timeline: vec![
                PeriodPoint {
                    label: "Jan".into(),
                    prior_value: 100.0,
                    current_value: 150.0,
                },
                PeriodPoint {
                    label: "Feb".into(),
                    prior_value: 0.0,
                    current_value: 0.0,
                },
            ],
            product_ranking: vec![
                RankingEntry {
                    name: "Suit".into(),
                    code: Some("ST-01".into()),
                    quantity: 20.0,
                },
                RankingEntry {
                    name: "Tie".into(),
                    code: None,
                    quantity: 5.0,
                },
            ],
            ticket_by_category: vec![CategoryTicket {
                name: "Suits".into(),
                ticket: 800.0,
            }],
        }
    }

    #[test]
    fn test_build_with_prior_period() {
        let view = build_sales_overview(&payload(Some(KpiFigures {
            revenue: 10000.0,
            order_count: 50,
            average_ticket: 200.0,
        })));

        assert_eq!(view.kpis.revenue_growth.unwrap().percent, 50);
        assert_eq!(view.indicators.len(), 3);
        assert!(view
            .indicators
            .iter()
            .all(|i| i.status == IndicatorStatus::Good));
        assert_eq!(view.timeline[0].growth.percent, 50);
        assert_eq!(view.timeline[1].growth.percent, 0);
        assert_eq!(view.product_ranking[1].share_of_max, 25.0);
        assert_eq!(view.product_ranking[0].item.code.as_deref(), Some("ST-01"));
        assert_eq!(view.ticket_by_category.len(), 1);
    }

    #[test]
    fn test_build_without_prior_period() {
        let view = build_sales_overview(&payload(None));
        assert!(view.kpis.revenue_growth.is_none());
        assert!(view.indicators.iter().all(|i| i.growth.is_none()));
        assert_eq!(view.timeline.len(), 2);
    }
}
