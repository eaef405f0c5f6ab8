use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const COMPACT_FILTER: &str = "info,tower_http=info,axum=info";
const JSON_FILTER: &str = "info,service::student=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else, or nothing, is compact.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }

    fn default_filter(self) -> &'static str {
        match self {
            LogFormat::Compact => COMPACT_FILTER,
            LogFormat::Json => JSON_FILTER,
        }
    }
}

/// `RUST_LOG` when set and parseable, otherwise the format's fallback directives.
fn env_filter(format: LogFormat) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format.default_filter()))
}

/// Install the global subscriber on stdout. A second call is a no-op.
pub fn init_logging(format: LogFormat) {
    let builder = fmt().with_env_filter(env_filter(format)).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// Pick the output format from `LOG_FORMAT`.
pub fn init_logging_from_env() {
    init_logging(LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref()))
}
