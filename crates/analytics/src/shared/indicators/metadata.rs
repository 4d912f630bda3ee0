use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn sales_revenue() -> IndicatorId {
        IndicatorId::new("sales_revenue")
    }
    pub fn sales_order_count() -> IndicatorId {
        IndicatorId::new("sales_order_count")
    }
    pub fn sales_avg_ticket() -> IndicatorId {
        IndicatorId::new("sales_avg_ticket")
    }
    pub fn goal_percent() -> IndicatorId {
        IndicatorId::new("goal_percent")
    }
    pub fn month_end_projection() -> IndicatorId {
        IndicatorId::new("month_end_projection")
    }
    pub fn required_daily_pace() -> IndicatorId {
        IndicatorId::new("required_daily_pace")
    }
}

fn money() -> ValueFormat {
    ValueFormat::Money {
        currency: "R$".into(),
    }
}

/// Build the full catalogue of indicators + sets.
pub fn build_catalog() -> IndicatorCatalog {
    let indicators = vec![
        IndicatorMeta {
            id: ids::sales_revenue(),
            label: "Revenue".into(),
            short_label: None,
            icon: "dollar-sign".into(),
            format: money(),
            description: Some("Sum of non-cancelled orders in the period".into()),
        },
        IndicatorMeta {
            id: ids::sales_order_count(),
            label: "Orders".into(),
            short_label: None,
            icon: "shopping-bag".into(),
            format: ValueFormat::Integer,
            description: Some("Number of non-cancelled orders".into()),
        },
        IndicatorMeta {
            id: ids::sales_avg_ticket(),
            label: "Average ticket".into(),
            short_label: Some("Avg. ticket".into()),
            icon: "receipt".into(),
            format: money(),
            description: Some("Revenue / Orders".into()),
        },
        IndicatorMeta {
            id: ids::goal_percent(),
            label: "Goal reached".into(),
            short_label: Some("Goal".into()),
            icon: "target".into(),
            format: ValueFormat::Percent { decimals: 1 },
            description: Some("Month-to-date revenue / monthly goal".into()),
        },
        IndicatorMeta {
            id: ids::month_end_projection(),
            label: "Month-end projection".into(),
            short_label: Some("Projection".into()),
            icon: "trending-up".into(),
            format: money(),
            description: Some("Daily average extrapolated over the whole month".into()),
        },
        IndicatorMeta {
            id: ids::required_daily_pace(),
            label: "Required per day".into(),
            short_label: None,
            icon: "calendar".into(),
            format: money(),
            description: Some("Remaining shortfall spread over the remaining days".into()),
        },
    ];

    let sets = vec![
        IndicatorSetMeta {
            id: "sales_overview".into(),
            label: "Sales overview".into(),
            indicators: vec![
                ids::sales_revenue(),
                ids::sales_order_count(),
                ids::sales_avg_ticket(),
            ],
            columns: 3,
        },
        IndicatorSetMeta {
            id: "current_month_goal".into(),
            label: "Current month".into(),
            indicators: vec![
                ids::goal_percent(),
                ids::month_end_projection(),
                ids::required_daily_pace(),
            ],
            columns: 3,
        },
    ];

    IndicatorCatalog { indicators, sets }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_reference_known_indicators() {
        let catalog = build_catalog();
        for set in &catalog.sets {
            for id in &set.indicators {
                assert!(
                    catalog.indicators.iter().any(|m| &m.id == id),
                    "set {} references unknown indicator {}",
                    set.id,
                    id.0
                );
            }
        }
    }

    #[test]
    fn test_goal_percent_meta() {
        let catalog = build_catalog();
        let meta = catalog
            .indicators
            .iter()
            .find(|m| m.id == ids::goal_percent())
            .unwrap();
        assert_eq!(meta.format, ValueFormat::Percent { decimals: 1 });
    }
}
