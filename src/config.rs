// ============================================================================
// Application Configuration
// ============================================================================
//
// Read once at startup from the environment. Every setting has a default,
// so an empty environment is a valid configuration.
//
//   DOMAIN_EVENTS_LOG             tracing filter (RUST_LOG still wins)
//   DOMAIN_EVENTS_LOG_THREAD_IDS  include thread ids in log lines
//   DOMAIN_EVENTS_METRICS         collect dispatcher metrics
//
// ============================================================================

pub const DEFAULT_LOG_FILTER: &str = "info,domain_events=debug";

const LOG_FILTER_KEY: &str = "DOMAIN_EVENTS_LOG";
const LOG_THREAD_IDS_KEY: &str = "DOMAIN_EVENTS_LOG_THREAD_IDS";
const METRICS_KEY: &str = "DOMAIN_EVENTS_METRICS";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a boolean, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_thread_ids: bool,
    pub metrics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_thread_ids: true,
            metrics_enabled: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup(LOG_FILTER_KEY)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let log_thread_ids = match lookup(LOG_THREAD_IDS_KEY) {
            Some(value) => parse_bool(LOG_THREAD_IDS_KEY, &value)?,
            None => defaults.log_thread_ids,
        };

        let metrics_enabled = match lookup(METRICS_KEY) {
            Some(value) => parse_bool(METRICS_KEY, &value)?,
            None => defaults.metrics_enabled,
        };

        Ok(Self {
            log_filter,
            log_thread_ids,
            metrics_enabled,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}
