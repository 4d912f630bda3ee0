use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use tokio::task::JoinSet;

use analytics::dashboards::{
    d100_sales_overview, d101_current_month, d102_customer_churn, d103_advanced,
};
use analytics::shared::config::{self, DashboardConfig};
use analytics::shared::indicators::metadata;
use analytics::shared::payload::{self, DashboardPayload};
use analytics::system;

#[derive(Debug, Parser)]
#[command(name = "analytics", about = "Render dashboard views from reporting-backend payloads")]
struct Cli {
    /// Monthly revenue goal. Defaults to `dashboard.monthly_goal` from the config.
    #[arg(long)]
    goal: Option<f64>,

    /// Category to drill into on the current month dashboard.
    #[arg(long)]
    category: Option<String>,

    /// Churn bucket in months. Defaults to `dashboard.churn_threshold_months`.
    #[arg(long)]
    churn_months: Option<u32>,

    /// Reference date (YYYY-MM-DD). Defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the indicator catalogue instead of rendering payloads.
    #[arg(long)]
    catalog: bool,

    /// Payload files, each tagged with its dashboard `kind`.
    #[arg(required_unless_present = "catalog")]
    paths: Vec<PathBuf>,
}

/// Selections the presentation layer passes into every computation.
#[derive(Debug, Clone)]
struct ViewOptions {
    monthly_goal: f64,
    selected_category: Option<String>,
    churn_threshold_months: u32,
    today: NaiveDate,
}

impl ViewOptions {
    fn resolve(cli: &Cli, defaults: &DashboardConfig, local_today: NaiveDate) -> Self {
        Self {
            monthly_goal: cli.goal.unwrap_or(defaults.monthly_goal),
            selected_category: cli.category.clone(),
            churn_threshold_months: cli.churn_months.unwrap_or(defaults.churn_threshold_months),
            today: cli.today.unwrap_or(local_today),
        }
    }
}

/// Apply the dashboard transform matching the payload kind.
fn render(payload: &DashboardPayload, options: &ViewOptions) -> serde_json::Result<String> {
    match payload {
        DashboardPayload::SalesOverview(p) => {
            serde_json::to_string_pretty(&d100_sales_overview::service::build_sales_overview(p))
        }
        DashboardPayload::CurrentMonth(p) => {
            serde_json::to_string_pretty(&d101_current_month::service::build_current_month(
                p,
                options.monthly_goal,
                options.selected_category.as_deref(),
                options.today,
            ))
        }
        DashboardPayload::CustomerChurn(r) => {
            serde_json::to_string_pretty(&d102_customer_churn::service::build_churn_view(
                r,
                options.churn_threshold_months,
                options.today,
            ))
        }
        DashboardPayload::Advanced(p) => {
            serde_json::to_string_pretty(&d103_advanced::service::build_advanced(p))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let cli = Cli::parse();

    if cli.catalog {
        println!("{}", serde_json::to_string_pretty(&metadata::build_catalog())?);
        return Ok(());
    }

    let config = config::load_config()?;
    let options = ViewOptions::resolve(&cli, &config.dashboard, chrono::Local::now().date_naive());
    tracing::info!("Rendering {} payload(s) with {:?}", cli.paths.len(), options);

    // Payloads are independent: each one is rendered as soon as it is loaded.
    let mut tasks = JoinSet::new();
    for path in cli.paths {
        tasks.spawn(payload::load_payload(path));
    }

    let mut failures = 0usize;
    while let Some(joined) = tasks.join_next().await {
        match joined.context("payload task panicked")? {
            Ok(payload) => println!("{}", render(&payload, &options)?),
            Err(e) => {
                failures += 1;
                tracing::error!("{e}");
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} payload(s) could not be rendered");
    }
    Ok(())
}
