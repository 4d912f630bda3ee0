use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d101_current_month::{GoalProjection, MonthProgress, PaceStatus};
use contracts::shared::indicators::{IndicatorStatus, IndicatorValue};

use super::finite_or_zero;
use crate::shared::indicators::metadata::ids;

/// Month progress for a calendar day: the day itself counts as elapsed.
pub fn progress_for_date(date: NaiveDate, current_revenue: f64, monthly_goal: f64) -> MonthProgress {
    let days_in_month = days_in_month(date.year(), date.month());
    MonthProgress {
        elapsed_days: date.day(),
        remaining_days: days_in_month.saturating_sub(date.day()),
        current_revenue,
        monthly_goal,
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Linear month-end projection and goal tracking for month-to-date revenue.
pub fn project(progress: &MonthProgress) -> GoalProjection {
    // at least the current day counts
    let elapsed = progress.elapsed_days.max(1) as f64;
    let remaining = progress.remaining_days as f64;
    let revenue = finite_or_zero(progress.current_revenue).max(0.0);
    let goal = finite_or_zero(progress.monthly_goal).max(0.0);

    let daily_average = revenue / elapsed;
    let month_end_projection = daily_average * (elapsed + remaining);

    let goal_percent = if goal > 0.0 {
        (revenue / goal) * 100.0
    } else {
        0.0
    };
    let goal_percent_clamped = goal_percent.min(100.0);

    let shortfall = (goal - revenue).max(0.0);
    let required_daily_pace = if progress.remaining_days > 0 {
        shortfall / remaining
    } else {
        0.0
    };

    let pace = if shortfall <= 0.0 {
        PaceStatus::GoalMet
    } else if progress.remaining_days > 0 {
        PaceStatus::Required
    } else {
        PaceStatus::PeriodOver
    };

    tracing::debug!(
        "goal projection: avg/day={daily_average:.2} projection={month_end_projection:.2} goal={goal_percent:.1}% pace={pace:?}"
    );

    GoalProjection {
        daily_average,
        month_end_projection,
        goal_percent,
        goal_percent_clamped,
        shortfall,
        required_daily_pace,
        pace,
    }
}

/// Card status for the goal KPIs.
///
/// A missed goal is only a warning while the linear projection still falls
/// short; once the period is over it is bad.
pub fn goal_status(progress: &MonthProgress, projection: &GoalProjection) -> IndicatorStatus {
    match projection.pace {
        PaceStatus::GoalMet => IndicatorStatus::Good,
        PaceStatus::PeriodOver => IndicatorStatus::Bad,
        PaceStatus::Required if projection.month_end_projection >= progress.monthly_goal => {
            IndicatorStatus::Neutral
        }
        PaceStatus::Required => IndicatorStatus::Warning,
    }
}

/// The goal KPI cards (percent reached, month-end projection, required pace).
pub fn goal_indicator_values(
    progress: &MonthProgress,
    projection: &GoalProjection,
) -> Vec<IndicatorValue> {
    let status = goal_status(progress, projection);
    [
        (ids::goal_percent(), projection.goal_percent),
        (ids::month_end_projection(), projection.month_end_projection),
        (ids::required_daily_pace(), projection.required_daily_pace),
    ]
    .into_iter()
    .map(|(id, value)| IndicatorValue {
        id,
        value,
        previous_value: None,
        growth: None,
        status,
    })
    .collect()
}
