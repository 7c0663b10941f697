use anyhow::{Context, Result};

/// Daily at midnight UTC (second minute hour day month day_of_week).
pub const DEFAULT_REFRESH_SCHEDULE: &str = "0 0 0 * * *";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the machine-translation provider.
    pub mt_api_url: String,

    /// Cron expression for the reference data refresh.
    pub refresh_schedule: String,

    /// Port the gateway listens on.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mt_api_url: std::env::var("MT_API_URL")
                .context("MT_API_URL not set")?
                .trim_end_matches('/')
                .to_string(),
            refresh_schedule: std::env::var("REFRESH_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_REFRESH_SCHEDULE.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_refresh_schedule_is_daily_midnight() {
        assert_eq!(DEFAULT_REFRESH_SCHEDULE, "0 0 0 * * *");
    }

    // Env vars are process-global, so all from_env cases run in one test to
    // avoid races with parallel test execution.
    #[test]
    fn test_from_env() {
        // Required value missing
        std::env::remove_var("MT_API_URL");
        std::env::remove_var("REFRESH_SCHEDULE");
        std::env::remove_var("PORT");
        assert!(Config::from_env().is_err());

        // Only the required value set: defaults apply
        std::env::set_var("MT_API_URL", "http://provider.example.com");
        let config = Config::from_env().expect("config");
        assert_eq!(config.mt_api_url, "http://provider.example.com");
        assert_eq!(config.refresh_schedule, DEFAULT_REFRESH_SCHEDULE);
        assert_eq!(config.port, 8080);

        // Trailing slash on the base URL is trimmed
        std::env::set_var("MT_API_URL", "http://provider.example.com/");
        let config = Config::from_env().expect("config");
        assert_eq!(config.mt_api_url, "http://provider.example.com");

        // Explicit overrides win
        std::env::set_var("REFRESH_SCHEDULE", "0 30 6 * * *");
        std::env::set_var("PORT", "9090");
        let config = Config::from_env().expect("config");
        assert_eq!(config.refresh_schedule, "0 30 6 * * *");
        assert_eq!(config.port, 9090);

        // Unparseable port falls back to the default
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env().expect("config");
        assert_eq!(config.port, 8080);

        std::env::remove_var("MT_API_URL");
        std::env::remove_var("REFRESH_SCHEDULE");
        std::env::remove_var("PORT");
    }
}
