use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::constants::{LOG_ENV, PROGRAM_NAME};

/// `log` backend printing `[chperm][LEVEL] message` to stderr.
pub struct StderrLogger {
    level: AtomicUsize,
}

impl StderrLogger {
    const fn new() -> Self {
        Self {
            level: AtomicUsize::new(0),
        }
    }

    fn level(&self) -> Option<Level> {
        level_from_usize(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, filter: LevelFilter) {
        self.level.store(filter as usize, Ordering::Relaxed);
        log::set_max_level(filter);
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let Some(level) = self.level() else {
            return false;
        };
        metadata.level() <= level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{PROGRAM_NAME}][{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger::new();
static INSTALLED: OnceLock<bool> = OnceLock::new();

fn level_from_usize(level: usize) -> Option<Level> {
    match level {
        x if x == LevelFilter::Error as usize => Some(Level::Error),
        x if x == LevelFilter::Warn as usize => Some(Level::Warn),
        x if x == LevelFilter::Info as usize => Some(Level::Info),
        x if x == LevelFilter::Debug as usize => Some(Level::Debug),
        x if x == LevelFilter::Trace as usize => Some(Level::Trace),
        _ => None,
    }
}

/// Parse a `CHPERM_LOG` value. Unknown values disable logging.
#[must_use]
pub fn parse_level(value: &str) -> LevelFilter {
    value.trim().parse().unwrap_or(LevelFilter::Off)
}

/// Install the stderr logger at the given level. Returns false when another logger already owns
/// the `log` facade.
pub fn install(filter: LevelFilter) -> bool {
    let installed = *INSTALLED.get_or_init(|| log::set_logger(&LOGGER).is_ok());
    if installed {
        LOGGER.set_level(filter);
    }
    installed
}

/// Install the stderr logger at the level named by `CHPERM_LOG`, if set.
pub fn init_from_env() -> bool {
    match std::env::var(LOG_ENV) {
        Ok(value) => install(parse_level(&value)),
        Err(_) => false,
    }
}
