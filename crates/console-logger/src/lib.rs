//! Console Logger
//!
//! `log` backend for wasm frontends. Each record is stamped with the local
//! time and routed to the `console.*` method matching its level, so browser
//! devtools can filter by severity.

use std::fmt;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Browser console logger
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Can only succeed once per page load.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Format a single log line: `HH:MM:SS.mmm LEVEL [target] message`
pub fn format_line(timestamp: &str, level: Level, target: &str, message: impl fmt::Display) -> String {
    format!("{} {} [{}] {}", timestamp, level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), record.target(), record.args());
        let value = JsValue::from_str(&line);

        match record.level() {
            Level::Error => web_sys::console::error_1(&value),
            Level::Warn => web_sys::console::warn_1(&value),
            Level::Info => web_sys::console::info_1(&value),
            Level::Debug => web_sys::console::log_1(&value),
            Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("09:15:02.118", Level::Error, "catalog::actions", format_args!("create failed: {}", "HTTP 500"));
        assert_eq!(line, "09:15:02.118 ERROR [catalog::actions] create failed: HTTP 500");
    }

    #[test]
    fn test_format_line_keeps_target_verbatim() {
        let line = format_line("00:00:00.000", Level::Debug, "northwind_catalog_ui::api", "GET /api/Category");
        assert_eq!(line, "00:00:00.000 DEBUG [northwind_catalog_ui::api] GET /api/Category");
    }

    #[test]
    fn test_init_only_once() {
        assert!(init(LevelFilter::Warn).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Warn);
        assert!(init(LevelFilter::Info).is_err());

        // Records below the configured level are filtered out before reaching the console
        let info = Metadata::builder().level(Level::Info).target("test").build();
        assert!(!LOGGER.enabled(&info));
        let error = Metadata::builder().level(Level::Error).target("test").build();
        assert!(LOGGER.enabled(&error));
    }
}
