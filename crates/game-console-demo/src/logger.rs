//! File + console logging using simplelog
//!
//! Every record goes to a timestamped log file in the cache directory
//! (~/.cache/game-console-demo/ on Linux). Records at the configured console
//! level are also shown in the console overlay.

use anyhow::{Context, Result};
use game_console::ConsoleLogger;
use log::{Log, Metadata, Record};
use simplelog::{CombinedLogger, Config, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const APP_NAME: &str = "game-console-demo";

/// Adapts a [`ConsoleLogger`] to simplelog's combined logger.
struct OverlayLogger(ConsoleLogger);

impl Log for OverlayLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        self.0.log(record);
    }

    fn flush(&self) {
        self.0.flush();
    }
}

impl SharedLogger for OverlayLogger {
    fn level(&self) -> LevelFilter {
        self.0.level()
    }

    fn config(&self) -> Option<&Config> {
        None
    }

    fn as_log(self: Box<Self>) -> Box<dyn Log> {
        Box::new(*self)
    }
}

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    match dirs::cache_dir().map(|dir| dir.join(APP_NAME)) {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => dir.join(filename),
        _ => PathBuf::from(filename),
    }
}

fn file_level() -> LevelFilter {
    std::env::var("RUST_LOG")
        .map(|v| match v.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        })
        .unwrap_or(LevelFilter::Debug)
}

/// Initialize logging to the file and the console overlay.
///
/// Returns the path to the log file.
pub fn init(console: ConsoleLogger) -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    CombinedLogger::init(vec![
        WriteLogger::new(file_level(), config, file),
        Box::new(OverlayLogger(console)),
    ])
    .context("Failed to initialize logger")?;

    Ok(log_file)
}
