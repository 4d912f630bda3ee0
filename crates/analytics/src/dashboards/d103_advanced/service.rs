use contracts::dashboards::d103_advanced::{AdvancedPayload, AdvancedView, VariationEntry, VariationRow};

use crate::shared::indicators::compute::ranking;

fn variation_label(entry: &VariationEntry) -> String {
    match entry.variation.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => format!("{} [{}]", entry.name, v),
        _ => entry.name.clone(),
    }
}

/// Build the advanced tab: sales by state and best-selling variations, both
/// as bars relative to their leader.
pub fn build_advanced(payload: &AdvancedPayload) -> AdvancedView {
    let variations: Vec<VariationRow> = payload
        .product_variations
        .iter()
        .map(|v| VariationRow {
            label: variation_label(v),
            quantity: v.quantity,
        })
        .collect();

    tracing::info!(
        "Advanced: {} states, {} variations",
        payload.sales_by_state.len(),
        variations.len()
    );

    AdvancedView {
        sales_by_state: ranking::normalize(&payload.sales_by_state),
        product_variations: ranking::normalize(&variations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d103_advanced::StateSales;

    fn variation(name: &str, variation: Option<&str>, quantity: f64) -> VariationEntry {
        VariationEntry {
            name: name.to_string(),
            variation: variation.map(str::to_string),
            quantity,
        }
    }

    #[test]
    fn test_build_advanced() {
        let payload = AdvancedPayload {
            sales_by_state: vec![
                StateSales {
                    state: "SP".into(),
                    revenue: 12000.0,
                },
                StateSales {
                    state: "MG".into(),
                    revenue: 3000.0,
                },
            ],
            product_variations: vec![
                variation("Navy Suit", Some("Navy / 48"), 10.0),
                variation("Oxford Shirt", Some(" "), 4.0),
                variation("Silk Tie", None, 1.0),
            ],
        };
        let view = build_advanced(&payload);

        assert_eq!(view.sales_by_state[0].share_of_max, 100.0);
        assert_eq!(view.sales_by_state[1].share_of_max, 25.0);
        assert_eq!(view.sales_by_state[1].item.state, "MG");

        let labels: Vec<&str> = view
            .product_variations
            .iter()
            .map(|v| v.item.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Navy Suit [Navy / 48]", "Oxford Shirt", "Silk Tie"]);
        assert_eq!(view.product_variations[1].share_of_max, 40.0);
    }

    #[test]
    fn test_build_advanced_empty() {
        let view = build_advanced(&AdvancedPayload::default());
        assert!(view.sales_by_state.is_empty());
        assert!(view.product_variations.is_empty());
    }
}
