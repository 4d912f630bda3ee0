use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Goal used when the user has not set one
    pub monthly_goal: f64,
    /// Inactivity threshold, in months, for the churn table
    pub churn_threshold_months: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dashboard]
monthly_goal = 60000.0
churn_threshold_months = 3
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if !config.dashboard.monthly_goal.is_finite() || config.dashboard.monthly_goal < 0.0 {
        anyhow::bail!(
            "dashboard.monthly_goal must be a non-negative number, got {}",
            config.dashboard.monthly_goal
        );
    }
    Ok(config)
}
