#![cfg(feature = "std")]

//! Stderr logger for the `seabattle` binary.

use std::env;
use std::io::Write;
use std::string::String;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable holding the log level (`off`, `error` … `trace`).
pub const LOG_ENV: &str = "SEABATTLE_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Writes `LEVEL module: message` lines for this crate's records only, so
/// stdout stays reserved for the boards and prompts.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("seabattle")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level for a raw `SEABATTLE_LOG` value. Unset or unparsable values fall
/// back to `warn`.
pub fn level_from_setting(setting: Option<&str>) -> LevelFilter {
    setting
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    let module = target.strip_prefix("seabattle::").unwrap_or(target);
    std::format!("{:<5} {}: {}", level, module, message)
}

/// Install the logger at the level named by [`LOG_ENV`] and return that
/// level. A second call keeps the first logger and only reports the level.
pub fn init_logging() -> LevelFilter {
    let setting = env::var(LOG_ENV).ok();
    let level = level_from_setting(setting.as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_setting() {
        assert_eq!(level_from_setting(None), LevelFilter::Warn);
        assert_eq!(level_from_setting(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from_setting(Some(" TRACE\n")), LevelFilter::Trace);
        assert_eq!(level_from_setting(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_setting(Some("loud")), LevelFilter::Warn);
    }

    #[test]
    fn test_format_record_strips_crate_prefix() {
        assert_eq!(
            format_record(Level::Debug, "seabattle::board", "ship at (1, 1) sunk, 6 left"),
            "DEBUG board: ship at (1, 1) sunk, 6 left"
        );
        assert_eq!(format_record(Level::Warn, "seabattle", "x"), "WARN  seabattle: x");
    }
}
