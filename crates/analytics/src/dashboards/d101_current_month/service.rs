use chrono::NaiveDate;
use contracts::dashboards::d101_current_month::{
    CurrentMonthPayload, CurrentMonthView, MonthProgress,
};

use crate::shared::indicators::compute::{drilldown, goal, ranking};

/// Month progress from the payload's day counts, or from `today` when the
/// backend did not send them.
fn month_progress(payload: &CurrentMonthPayload, monthly_goal: f64, today: NaiveDate) -> MonthProgress {
    match (payload.elapsed_days, payload.remaining_days) {
        (Some(elapsed), Some(remaining)) => MonthProgress {
            elapsed_days: elapsed.max(1),
            remaining_days: remaining,
            current_revenue: payload.total_revenue,
            monthly_goal,
        },
        _ => {
            tracing::debug!("day counts missing, deriving month progress from {today}");
            goal::progress_for_date(today, payload.total_revenue, monthly_goal)
        }
    }
}

/// Build the current month dashboard for a goal and category selection.
pub fn build_current_month(
    payload: &CurrentMonthPayload,
    monthly_goal: f64,
    selected_category: Option<&str>,
    today: NaiveDate,
) -> CurrentMonthView {
    let progress = month_progress(payload, monthly_goal, today);
    let projection = goal::project(&progress);
    let indicators = goal::goal_indicator_values(&progress, &projection);
    let drill_down = drilldown::resolve(&payload.products, selected_category);
    let drill_down_bars = ranking::normalize(&drill_down.items);

    tracing::info!(
        "Current month {}: {:.1}% of goal, drill-down \"{}\" with {} products",
        payload.month_label,
        projection.goal_percent,
        drill_down.title,
        drill_down.items.len()
    );

    CurrentMonthView {
        month_label: payload.month_label.clone(),
        total_revenue: payload.total_revenue,
        total_orders: payload.total_orders,
        average_ticket: payload.average_ticket,
        progress,
        projection,
        indicators,
        daily_sales: payload.daily_sales.clone(),
        categories: drilldown::revenue_shares(&payload.categories, payload.total_revenue),
        payment_methods: drilldown::revenue_shares(&payload.payment_methods, payload.total_revenue),
        selected_category: selected_category.map(str::to_string),
        drill_down,
        drill_down_bars,
    }
}
