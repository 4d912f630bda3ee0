use contracts::shared::indicators::{AnnotatedPoint, GrowthResult, PeriodPoint};

use super::finite_or_zero;

/// Growth reported when the prior period is zero and the current one is not.
///
/// A display convention, not a ratio: a zero baseline has no defined
/// percentage change, so any gain from it is shown as a full gain.
pub const ZERO_BASELINE_GROWTH_PERCENT: i64 = 100;

/// Percentage change from `prior` to `current`, rounded to a whole percent.
///
/// Halves round toward positive infinity, so `-2.5` becomes `-2`.
pub fn growth(prior: f64, current: f64) -> GrowthResult {
    let prior = finite_or_zero(prior);
    let current = finite_or_zero(current);

    let percent = if prior > 0.0 {
        let ratio = ((current - prior) / prior) * 100.0;
        (ratio + 0.5).floor() as i64
    } else if current > 0.0 {
        ZERO_BASELINE_GROWTH_PERCENT
    } else {
        0
    };

    GrowthResult { percent }
}

/// Attach `growth(prior, current)` to every point, keeping order and length.
pub fn annotate_series(points: &[PeriodPoint]) -> Vec<AnnotatedPoint> {
    points
        .iter()
        .map(|p| AnnotatedPoint {
            point: p.clone(),
            growth: growth(p.prior_value, p.current_value),
        })
        .collect()
}
