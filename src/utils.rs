use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};

/// Writes timestamped diagnostics to stderr, keeping stdout for the
/// per-file report.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Installs the logger. Debug builds log everything down to `Debug`.
    pub fn init() -> Result<(), log::SetLoggerError> {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
    }
}

fn format_entry(level: Level, args: &std::fmt::Arguments) -> String {
    format!(
        "[{} {:<5}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level,
        args
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", format_entry(record.level(), record.args()));
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
