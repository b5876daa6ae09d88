//! Logging subsystem.
use std::sync::Mutex;

use slog::{o, Drain, Level, LevelFilter, Logger};

/// Creates a root logger writing JSON records to standard error, dropping
/// records less severe than `level`.
pub fn new_logger(level: Level) -> Logger {
    let drain = Mutex::new(slog_json::Json::default(std::io::stderr())).map(slog::Fuse);
    let drain = LevelFilter::new(drain, level).fuse();
    Logger::root(drain, o!())
}

/// Creates a logger that discards all records.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Derives a logger for the given module.
pub fn module_logger(parent: &Logger, module: &'static str) -> Logger {
    parent.new(o!("module" => module))
}
