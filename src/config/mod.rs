use std::env;
use std::str::FromStr;

/// How reservation dates are grouped into monthly chart buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MonthBucketing {
    /// Group by month number only; the same month in different years is summed.
    #[default]
    MergeYears,
    /// Group by calendar year and month.
    PerYear,
}

impl FromStr for MonthBucketing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month" | "merge_years" => Ok(Self::MergeYears),
            "year_month" | "per_year" => Ok(Self::PerYear),
            other => Err(ConfigError::Invalid {
                key: "DASHBOARD_MONTH_BUCKETING",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {key}")]
    Missing {
        key: &'static str,
        #[source]
        source: env::VarError,
    },

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub month_bucketing: MonthBucketing,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").map_err(|source| ConfigError::Missing {
                key: "DATABASE_URL",
                source,
            })?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            month_bucketing: match env::var("DASHBOARD_MONTH_BUCKETING") {
                Ok(value) => value.parse()?,
                Err(_) => MonthBucketing::default(),
            },
        })
    }
}
