// File-backed backend for the `log` facade, installed once at start-up.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::WordCountConfig;
use crate::error::WordCountError;

pub struct FileLogger<W: Write + Send> {
    sink: Mutex<W>,
    level: LevelFilter,
}

impl<W: Write + Send> FileLogger<W> {
    pub fn new(sink: W, level: LevelFilter) -> Self {
        Self { sink: Mutex::new(sink), level }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Log for FileLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut sink) = self.sink.lock() {
            // write errors are dropped
            let _ = writeln!(sink, "{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

/// Opens the configured log file in append mode and registers it as the global logger.
pub fn init(cfg: &WordCountConfig) -> Result<(), WordCountError> {
    let file: File = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cfg.log_file)
        .map_err(|e| WordCountError::Logger(format!("{}: {e}", cfg.log_file)))?;

    let level = LevelFilter::from(cfg.log_level);
    log::set_boxed_logger(Box::new(FileLogger::new(file, level)))
        .map_err(|e| WordCountError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
