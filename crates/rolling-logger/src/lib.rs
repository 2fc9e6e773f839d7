//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and echoes each one to the browser console (wasm) or stderr.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    pub fn line(&self) -> String {
        format!("[{}] {} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

pub struct RollingLogger {
    capacity: usize,
    level: LevelFilter,
    echo: bool,
    buffer: Mutex<VecDeque<LogRecord>>,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        Self {
            capacity: capacity.max(1),
            level,
            echo: true,
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Keep records in the buffer only
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Buffered records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn push(&self, record: LogRecord) {
        if let Ok(mut buffer) = self.buffer.lock() {
            while buffer.len() >= self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(record);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogRecord {
            timestamp: chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            echo(&entry);
        }
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn echo(entry: &LogRecord) {
    let line = entry.line();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        _ => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(entry: &LogRecord) {
    eprintln!("{}", entry.line());
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(capacity, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Records held by the global logger, if installed
pub fn recent() -> Vec<LogRecord> {
    LOGGER.get().map(RollingLogger::records).unwrap_or_default()
}
