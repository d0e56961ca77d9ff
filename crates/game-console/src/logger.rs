//! `log` backend that writes into a console
//!
//! Records at `Error`/`Warn` become error lines, everything else info lines,
//! formatted as `[LEVEL] message`.
//!
//! Records from this crate itself are never routed back into the console:
//! the console logs on every commit and eviction, and feeding those into its
//! own scrollback would evict lines just to log the eviction.

use crate::config::ConsoleConfig;
use crate::console::ConsoleHandle;
use crate::error::ConsoleError;
use crate::model::OutputCategory;
use log::{Level, LevelFilter, Log, Metadata, Record};

const OWN_TARGET: &str = "game_console";

/// Routes log records into a console.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    handle: ConsoleHandle,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(handle: ConsoleHandle, level: LevelFilter) -> Self {
        Self { handle, level }
    }

    /// Logger with the level filter from `config`.
    pub fn from_config(handle: ConsoleHandle, config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(handle, config.level_filter()?))
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    fn category(level: Level) -> OutputCategory {
        match level {
            Level::Error | Level::Warn => OutputCategory::Error,
            Level::Info | Level::Debug | Level::Trace => OutputCategory::Info,
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let own = metadata.target() == OWN_TARGET
            || metadata.target().starts_with("game_console::");
        metadata.level() <= self.level && !own
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.level(), record.args());
        // a detached console simply stops showing log output
        let _ = self
            .handle
            .write_line(line, Self::category(record.level()));
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Console;
    use crate::model::{OutputLine, Viewport};
    use crate::testing::MonoGlyphs;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn console() -> Console {
        Console::builder()
            .glyphs(Arc::new(MonoGlyphs))
            .viewport(Viewport::new(800, 600))
            .build()
            .unwrap()
    }

    fn emit(logger: &ConsoleLogger, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target(target)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn test_levels_map_to_categories() {
        let console = console();
        let logger = ConsoleLogger::new(console.handle(), LevelFilter::Info);

        emit(&logger, Level::Info, "game", "loaded level 1");
        emit(&logger, Level::Warn, "game", "low fps");
        emit(&logger, Level::Debug, "game", "filtered out");

        assert_eq!(
            console.lines(),
            vec![
                OutputLine::new("[INFO] loaded level 1", OutputCategory::Info),
                OutputLine::new("[WARN] low fps", OutputCategory::Error),
            ]
        );
    }

    #[test]
    fn test_own_records_are_skipped() {
        let console = console();
        let logger = ConsoleLogger::new(console.handle(), LevelFilter::Trace);

        emit(&logger, Level::Debug, "game_console::console", "Evicted 1 lines");
        emit(&logger, Level::Debug, "game_console_demo", "host message");

        assert_eq!(
            console.lines(),
            vec![OutputLine::new("[DEBUG] host message", OutputCategory::Info)]
        );
    }

    #[test]
    fn test_detached_logger_does_not_panic() {
        let logger = ConsoleLogger::new(ConsoleHandle::detached(), LevelFilter::Trace);
        emit(&logger, Level::Error, "game", "nobody listens");
    }

    #[test]
    fn test_from_config() {
        let config = ConsoleConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };
        let logger = ConsoleLogger::from_config(ConsoleHandle::detached(), &config).unwrap();
        assert_eq!(logger.level(), LevelFilter::Warn);
    }
}
