use contracts::dashboards::d100_sales_overview::RankingEntry;
use contracts::dashboards::d101_current_month::ProductEntry;
use contracts::dashboards::d103_advanced::{StateSales, VariationRow};
use contracts::shared::indicators::NormalizedItem;

use super::finite_or_zero;

/// A row of a ranking that can be drawn as a bar.
pub trait Ranked {
    /// Figure the bar length is proportional to.
    fn bar_value(&self) -> f64;
}

impl Ranked for ProductEntry {
    fn bar_value(&self) -> f64 {
        self.quantity
    }
}

impl Ranked for RankingEntry {
    fn bar_value(&self) -> f64 {
        self.quantity
    }
}

impl Ranked for VariationRow {
    fn bar_value(&self) -> f64 {
        self.quantity
    }
}

impl Ranked for StateSales {
    fn bar_value(&self) -> f64 {
        self.revenue
    }
}

/// Annotate each item with its bar value as a percentage of the largest one.
///
/// The maximum is floored at 1, so an empty or all-zero list yields zero
/// widths instead of dividing by zero. Input order is kept; sorting is the
/// data source's job.
pub fn normalize<T: Ranked + Clone>(items: &[T]) -> Vec<NormalizedItem<T>> {
    let max_quantity = items
        .iter()
        .map(|i| finite_or_zero(i.bar_value()))
        .fold(1.0_f64, f64::max);

    items
        .iter()
        .map(|item| NormalizedItem {
            item: item.clone(),
            share_of_max: (finite_or_zero(item.bar_value()) / max_quantity * 100.0).max(0.0),
        })
        .collect()
}
