//! Telemetry initialization - tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,blog_api=debug,blog_infra=debug,blog_core=debug";

/// Telemetry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// `EnvFilter` directives; `RUST_LOG` when set.
    pub filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` (`LOG_FORMAT`, `RUST_LOG`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            json_logs: lookup("LOG_FORMAT")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("json")),
            filter: lookup("RUST_LOG")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }

    /// Build the filter, falling back to the defaults when the directives
    /// don't parse. The second value carries the parse error.
    fn env_filter(&self) -> (EnvFilter, Option<String>) {
        match EnvFilter::try_new(&self.filter) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e.to_string())),
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_telemetry(config: &TelemetryConfig) {
    let (env_filter, filter_error) = config.env_filter();

    let installed = if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
    };

    if let Err(e) = installed {
        eprintln!("Tracing subscriber already installed: {e}");
        return;
    }

    if let Some(e) = filter_error {
        tracing::warn!(filter = %config.filter, "Invalid log filter ({}), using defaults", e);
    }
    tracing::info!(json_logs = config.json_logs, "Telemetry initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        assert_eq!(TelemetryConfig::from_lookup(|_| None), TelemetryConfig::default());
    }

    #[test]
    fn test_reads_format_and_filter() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            ("LOG_FORMAT", " JSON "),
            ("RUST_LOG", "warn,blog_core=trace"),
        ]));

        assert!(config.json_logs);
        assert_eq!(config.filter, "warn,blog_core=trace");
        assert!(config.env_filter().1.is_none());
    }

    #[test]
    fn test_blank_filter_uses_default() {
        let config =
            TelemetryConfig::from_lookup(lookup(&[("RUST_LOG", "  "), ("LOG_FORMAT", "pretty")]));

        assert!(!config.json_logs);
        assert_eq!(config.filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_unparseable_filter_falls_back() {
        let config = TelemetryConfig {
            json_logs: false,
            filter: "blog_core=notalevel".to_string(),
        };

        assert!(config.env_filter().1.is_some());
    }
}
