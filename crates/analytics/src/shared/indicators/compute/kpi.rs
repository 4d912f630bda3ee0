use contracts::shared::indicators::*;

use super::finite_or_zero;
use super::growth::growth;
use crate::shared::indicators::metadata::ids;

/// Revenue per order, 0 when there were no orders.
pub fn average_ticket(revenue: f64, order_count: u64) -> f64 {
    if order_count > 0 {
        finite_or_zero(revenue) / order_count as f64
    } else {
        0.0
    }
}

/// Build period figures from raw totals, deriving the average ticket.
pub fn figures_from_totals(revenue: f64, order_count: u64) -> KpiFigures {
    KpiFigures {
        revenue: finite_or_zero(revenue),
        order_count,
        average_ticket: average_ticket(revenue, order_count),
    }
}

/// Attach growth against `prior` to each headline KPI.
///
/// Without a prior period the summary carries the raw figures only; a missing
/// comparison never blocks the KPI itself.
pub fn annotate(current: &KpiFigures, prior: Option<&KpiFigures>) -> KpiSummary {
    let mut summary = KpiSummary {
        revenue: finite_or_zero(current.revenue),
        order_count: current.order_count,
        average_ticket: finite_or_zero(current.average_ticket),
        revenue_growth: None,
        order_growth: None,
        ticket_growth: None,
    };

    match prior {
        Some(prev) => {
            summary.revenue_growth = Some(growth(prev.revenue, current.revenue));
            summary.order_growth = Some(growth(
                prev.order_count as f64,
                current.order_count as f64,
            ));
            summary.ticket_growth = Some(growth(prev.average_ticket, current.average_ticket));
        }
        None => tracing::debug!("no prior period, KPI growth omitted"),
    }

    summary
}

/// Card status from a growth figure: up is good, down is bad.
pub fn status_by_growth(growth: Option<GrowthResult>, higher_is_good: bool) -> IndicatorStatus {
    match growth.map(|g| g.percent) {
        Some(p) if p > 0 => {
            if higher_is_good {
                IndicatorStatus::Good
            } else {
                IndicatorStatus::Bad
            }
        }
        Some(p) if p < 0 => {
            if higher_is_good {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            }
        }
        _ => IndicatorStatus::Neutral,
    }
}

/// The three headline KPI cards (revenue, orders, average ticket) in display order.
pub fn indicator_values(summary: &KpiSummary, prior: Option<&KpiFigures>) -> Vec<IndicatorValue> {
    vec![
        IndicatorValue {
            id: ids::sales_revenue(),
            value: summary.revenue,
            previous_value: prior.map(|p| p.revenue),
            growth: summary.revenue_growth,
            status: status_by_growth(summary.revenue_growth, true),
        },
        IndicatorValue {
            id: ids::sales_order_count(),
            value: summary.order_count as f64,
            previous_value: prior.map(|p| p.order_count as f64),
            growth: summary.order_growth,
            status: status_by_growth(summary.order_growth, true),
        },
        IndicatorValue {
            id: ids::sales_avg_ticket(),
            value: summary.average_ticket,
            previous_value: prior.map(|p| p.average_ticket),
            growth: summary.ticket_growth,
            status: status_by_growth(summary.ticket_growth, true),
        },
    ]
}
