use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::config::DeveloperConfig;
use crate::error::{BadgeError, Result};

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = JsValue::from_str(&format_record(record));
            match record.level() {
                Level::Error => console::error_1(&line),
                Level::Warn => console::warn_1(&line),
                Level::Info => console::info_1(&line),
                Level::Debug | Level::Trace => console::debug_1(&line),
            }
        }
    }

    // The browser console is unbuffered.
    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "[{} {}:{}] {}",
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

pub fn log_level(config: &DeveloperConfig) -> LevelFilter {
    if config.logging {
        LevelFilter::Debug
    } else {
        LevelFilter::Error
    }
}

/// Installs the console logger. Fails if a logger is already installed.
pub fn setup_logging(config: &DeveloperConfig) -> Result<()> {
    let level = log_level(config);
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))
        .map_err(|e| BadgeError::Logging(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_follows_developer_flag() {
        assert_eq!(log_level(&DeveloperConfig { logging: true }), LevelFilter::Debug);
        assert_eq!(log_level(&DeveloperConfig { logging: false }), LevelFilter::Error);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = ConsoleLogger {
            level: LevelFilter::Error,
        };
        let warn = Metadata::builder().level(Level::Warn).build();
        let error = Metadata::builder().level(Level::Error).build();
        assert!(!logger.enabled(&warn));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_record_format() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("mounted {} badges", 3))
                .level(Level::Info)
                .file(Some("src/mount.rs"))
                .line(Some(42))
                .build(),
        );
        assert_eq!(line, "[INFO src/mount.rs:42] mounted 3 badges");
    }
}
