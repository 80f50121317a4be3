//! Logger initialization.

use std::sync::Once;

/// Filters follow the `env_logger` syntax (e.g. "info",
/// "triangle_cpu=trace"). `RUST_LOG` takes precedence over `default_filter`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Picks the filter to install given the value of `RUST_LOG`, if any.
    pub fn resolve_filter(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| self.default_filter.clone())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger. Calls after the first are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());
        env_logger::Builder::new().parse_filters(&filter).init();
        log::debug!("logging initialized with filter {filter:?}");
    });
}
