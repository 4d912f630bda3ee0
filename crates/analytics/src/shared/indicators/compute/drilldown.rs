use contracts::dashboards::d101_current_month::{
    CategoryProductMap, DrillDownResult, SegmentShare, SegmentTotal,
};

use super::finite_or_zero;

/// Product list and title for the current category selection.
///
/// An unknown or absent category falls back to the overall top list. A known
/// category with no products resolves to an empty list, not the fallback.
pub fn resolve(map: &CategoryProductMap, selected_category: Option<&str>) -> DrillDownResult {
    if let Some(category) = selected_category {
        if let Some(items) = map.by_category.get(category) {
            return DrillDownResult {
                title: format!("Top in {category}"),
                items: items.clone(),
            };
        }
        tracing::warn!("category {category:?} not in product map, showing overall top");
    }

    DrillDownResult {
        title: format!("Top {} Products (Overall)", map.top_n),
        items: map.global_top.clone(),
    }
}

/// Clicking the selected category again clears the selection.
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

/// Each segment's percentage of the month's total revenue (categories,
/// payment methods).
pub fn revenue_shares(segments: &[SegmentTotal], total_revenue: f64) -> Vec<SegmentShare> {
    let total = finite_or_zero(total_revenue);
    segments
        .iter()
        .map(|c| {
            let revenue = finite_or_zero(c.revenue);
            let percent = if total > 0.0 {
                revenue / total * 100.0
            } else {
                0.0
            };
            SegmentShare {
                name: c.name.clone(),
                revenue,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d101_current_month::ProductEntry;
    use std::collections::HashMap;

    fn product(name: &str, quantity: f64, revenue: f64) -> ProductEntry {
        ProductEntry {
            name: name.to_string(),
            quantity,
            revenue,
        }
    }

    fn sample_map() -> CategoryProductMap {
        let mut by_category = HashMap::new();
        by_category.insert(
            "Shirts".to_string(),
            vec![product("Oxford", 12.0, 1200.0), product("Linen", 3.0, 450.0)],
        );
        by_category.insert("Ties".to_string(), vec![]);
        CategoryProductMap {
            by_category,
            global_top: vec![
                product("Suit", 5.0, 5000.0),
                product("Oxford", 12.0, 1200.0),
            ],
            top_n: 10,
        }
    }

    #[test]
    fn test_resolve_selected_category() {
        let map = sample_map();
        let result = resolve(&map, Some("Shirts"));
        assert!(result.title.contains("Shirts"));
        assert_eq!(result.items, map.by_category["Shirts"]);
    }

    #[test]
    fn test_resolve_without_selection() {
        let map = sample_map();
        let result = resolve(&map, None);
        assert_eq!(result.title, "Top 10 Products (Overall)");
        assert_eq!(result.items, map.global_top);
    }

    #[test]
    fn test_resolve_unknown_category_falls_back() {
        let map = sample_map();
        let result = resolve(&map, Some("Shoes"));
        assert_eq!(result.items, map.global_top);
        assert!(result.title.contains("Overall"));
    }

    #[test]
    fn test_resolve_empty_category_is_valid() {
        let result = resolve(&sample_map(), Some("Ties"));
        assert_eq!(result.title, "Top in Ties");
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_resolve_returns_independent_copies() {
        let map = sample_map();
        let mut first = resolve(&map, Some("Shirts"));
        first.items.clear();
        let second = resolve(&map, Some("Shirts"));
        assert_eq!(second.items.len(), 2);
    }

    #[test]
    fn test_toggle_selection() {
        assert_eq!(toggle_selection(Some("Shirts"), "Shirts"), None);
        assert_eq!(toggle_selection(Some("Shirts"), "Pants"), Some("Pants".to_string()));
        assert_eq!(toggle_selection(None, "Pants"), Some("Pants".to_string()));
    }

    #[test]
    fn test_revenue_shares() {
        let categories = vec![
            SegmentTotal {
                name: "Suits".into(),
                revenue: 750.0,
            },
            SegmentTotal {
                name: "Shirts".into(),
                revenue: 250.0,
            },
        ];
        let shares = revenue_shares(&categories, 1000.0);
        assert_eq!(shares[0].name, "Suits");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].percent, 25.0);

        let empty_month = revenue_shares(&categories, 0.0);
        assert!(empty_month.iter().all(|s| s.percent == 0.0));
    }
}
