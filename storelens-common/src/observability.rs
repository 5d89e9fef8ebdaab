//! Tracing setup shared by the server binary and integration tests.
//!
//! [`init_logging`] installs the global subscriber once: a daily-rolling
//! file sink, optionally mirrored to stderr. Later calls are no-ops that
//! return the originally resolved log file path.

use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Component name, used for the log file name and the fallback directory.
    pub app_name: &'static str,
    /// Explicit log directory. When `None`, `STORELENS_LOG_DIR` wins, then
    /// `~/.local/share/<app_name>`.
    pub log_dir: Option<PathBuf>,
    /// Mirror events to stderr in addition to the file sink.
    pub emit_stderr: bool,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: "storelens",
            log_dir: None,
            emit_stderr: false,
            default_filter: "info",
        }
    }
}

/// Initialise the global `tracing` subscriber and return the path of
/// today's log file.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = resolve_log_dir(&config);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let file_name = format!("{}.log", config.app_name);
    // The daily appender suffixes the file name with the current date.
    let today_path = dir.join(format!("{file_name}.{}", Local::now().format("%Y-%m-%d")));

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, file_name));
    let _ = LOG_GUARD.set(guard);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));
    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    let installed = if config.emit_stderr {
        registry.with(fmt::layer().with_writer(io::stderr)).try_init()
    } else {
        registry.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = LOG_PATH.set(today_path.clone());
    Ok(today_path)
}

fn resolve_log_dir(config: &LogConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return expand_home(dir.clone());
    }
    if let Ok(dir) = std::env::var("STORELENS_LOG_DIR") {
        return expand_home(PathBuf::from(dir));
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(config.app_name),
        Err(_) => PathBuf::from(".").join(config.app_name),
    }
}

fn expand_home(path: PathBuf) -> PathBuf {
    if let (Some(rest), Ok(home)) = (
        path.to_str().and_then(|s| s.strip_prefix("~/")),
        std::env::var("HOME"),
    ) {
        return PathBuf::from(home).join(rest);
    }
    path
}
