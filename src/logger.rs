// Copyright 2026 The cdfplot Authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Log, Metadata, Record, SetLoggerError};

pub use log::Level;

/// A simple timestamped logger writing single lines to standard out.
pub struct Logger {
    label: String,
    level: Level,
}

impl Logger {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the label shown for info and higher level messages. Debug and
    /// trace messages show the module path instead.
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Sets the most verbose level which will be logged.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Registers the logger as the global receiver for the log macros.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            label: env!("CARGO_PKG_NAME").to_string(),
            level: Level::Info,
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if record.level() >= Level::Debug {
                record.target()
            } else {
                &self.label
            };
            println!(
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                target,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
