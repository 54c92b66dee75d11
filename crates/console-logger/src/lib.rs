//! Console Logger
//!
//! `log` backend for wasm frontends. Records go to `console.debug/info/warn/error`
//! so the browser's level filter works as expected.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    match record.module_path() {
        Some(module) => format!("{} {}: {}", record.level(), module, record.args()),
        None => format!("{} {}", record.level(), record.args()),
    }
}

/// Install the console logger. Calling this twice keeps the first logger.
pub fn init(level: LevelFilter) {
    let logger = Box::new(ConsoleLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Parse a level name ("info", "WARN", ...), defaulting to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }

    #[test]
    fn test_format_record_includes_module() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("liked {}", 42))
                .level(Level::Info)
                .module_path(Some("portfolio::like"))
                .build(),
        );
        assert_eq!(line, "INFO portfolio::like: liked 42");
    }
}
