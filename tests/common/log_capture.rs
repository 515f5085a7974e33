//! Process-wide logger that keeps every record for later inspection
//!
//! Tests in one binary run concurrently and share the logger, so assertions
//! should look for messages they caused rather than count all records.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

/// Install the capturing logger once and return it
pub fn capture_logs() -> &'static CaptureLogger {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
    &LOGGER
}

impl CaptureLogger {
    /// Messages logged at `level` that contain `needle`
    pub fn messages(&self, level: Level, needle: &str) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(l, msg)| *l == level && msg.contains(needle))
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        !self.messages(Level::Warn, needle).is_empty()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
