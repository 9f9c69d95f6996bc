// Logging for the gatekeeper module, on tracing-subscriber.
//
// The policy crates only use the `log` facade; `tracing_log::LogTracer`
// forwards those records into the subscriber installed here. The bridge is
// installed only here: tracing-subscriber is built without its own
// tracing-log feature, so `try_init` does not try to set it a second time.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::Path;

use gatekeeper_configs::LoggingSettings;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `timestamp LEVEL target: message`
    Compact,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "json" | "jsonl" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Base level first, then per-target overrides from config.
fn build_env_filter(level: &str, targets: &HashMap<String, String>) -> anyhow::Result<EnvFilter> {
    let mut directives = vec![level.to_string()];
    let mut overrides: Vec<_> = targets.iter().collect();
    overrides.sort();
    directives.extend(overrides.into_iter().map(|(target, lvl)| format!("{}={}", target, lvl)));

    let filter = directives.join(",");
    EnvFilter::try_new(&filter).map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter, e))
}

/// Install the global subscriber described by `settings`.
///
/// Fails if the log file cannot be opened or a global subscriber is already
/// set (the host or another module may own logging).
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(&settings.file_path).parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&settings.file_path)?;

    // Already set when the host bridged `log` itself.
    tracing_log::LogTracer::init().ok();

    let console_layer = if settings.log_to_console {
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_filter(build_env_filter(&settings.level, &settings.targets)?),
        )
    } else {
        None
    };

    let file_layer = match LogFormat::parse(&settings.format) {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(log_file)
            .with_target(true)
            .with_thread_names(true)
            .with_filter(build_env_filter(&settings.level, &settings.targets)?)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(log_file)
            .with_target(true)
            .with_thread_names(true)
            .with_filter(build_env_filter(&settings.level, &settings.targets)?)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::debug!(
        target: "gatekeeper::lifecycle",
        "Logging initialized: level={}, console={}, file={}",
        settings.level,
        settings.log_to_console,
        settings.file_path
    );
    Ok(())
}

/// Console-only logging at `info`, for development and tests.
pub fn init_simple_logging() -> anyhow::Result<()> {
    tracing_log::LogTracer::init().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("jsonl"), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Compact);
    }

    #[test]
    fn test_env_filter_with_target_overrides() {
        let mut targets = HashMap::new();
        targets.insert("gatekeeper::policy".to_string(), "debug".to_string());
        targets.insert("gatekeeper::hook".to_string(), "trace".to_string());
        let filter = build_env_filter("warn", &targets).unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("gatekeeper::policy=debug"));
        assert!(rendered.contains("gatekeeper::hook=trace"));
    }

    #[test]
    fn test_env_filter_rejects_garbage_level() {
        assert!(build_env_filter("gatekeeper::policy=loud", &HashMap::new()).is_err());
    }
}
