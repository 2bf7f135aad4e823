//! Structured logging initialization.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a JSON or
//! pretty `fmt` layer. Library code only emits `tracing` events; binaries and
//! demos call [`init_logging_with_config`] once at startup.
//!
//! `RUST_LOG`, when set, takes precedence over the configured level.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for production, pretty-print for development
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json, // Default to JSON
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
    /// Write through a background thread instead of blocking on stderr
    pub async_logging: bool,
    /// Extra filter directives (comma-separated, `target=level`)
    pub target_filter: Option<String>,
    /// Include file:line location (dev only)
    pub include_location: bool,
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("JSONMVC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(
                &env::var("JSONMVC_LOG_FORMAT").unwrap_or_else(|_| "json".to_string()),
            ),
            async_logging: env::var("JSONMVC_LOG_ASYNC")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            target_filter: env::var("JSONMVC_LOG_TARGETS").ok(),
            include_location: env::var("JSONMVC_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Verbose, human-readable configuration for local runs
    pub fn default_dev() -> Self {
        Self {
            log_level: "debug".to_string(),
            format: LogFormat::Pretty,
            async_logging: false,
            target_filter: None,
            include_location: true,
        }
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Keeps the background writer alive; drop it only at shutdown so buffered
/// records are flushed.
#[must_use = "dropping the guard stops the async log writer"]
pub struct LoggingGuard {
    _worker: Option<WorkerGuard>,
}

/// Initialize logging with the given configuration.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
///
/// # Example
///
/// ```no_run
/// use jsonmvc::logging::{init_logging_with_config, LogConfig};
///
/// let _guard = init_logging_with_config(&LogConfig::from_env())
///     .expect("Failed to initialize logging");
/// ```
pub fn init_logging_with_config(config: &LogConfig) -> Result<LoggingGuard> {
    let mut env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str()));

    if let Some(target_filter) = &config.target_filter {
        for filter in target_filter.split(',') {
            let filter = filter.trim();
            if filter.is_empty() {
                continue;
            }
            match filter.parse() {
                Ok(directive) => env_filter = env_filter.add_directive(directive),
                Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
            }
        }
    }

    let (writer, worker) = if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        (tracing_subscriber::fmt::writer::BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr), None)
    };

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_span_list(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(LoggingGuard { _worker: worker })
}
