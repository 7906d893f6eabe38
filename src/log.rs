// src/log.rs
//! File sink for the `log` facade, used by the binary.
//!
//! Lines look like `[00:00:01.234][INFO] message`, timed from the first log
//! call. Warnings and errors also go to stderr.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn default_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

pub struct FileLogger {
    level: LevelFilter,
    file: Mutex<Option<File>>,
}

impl FileLogger {
    /// Opens (appending) the log file; if that fails, only stderr output
    /// remains.
    pub fn new(path: &Path, level: LevelFilter) -> Self {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path).ok();
        Self { level, file: Mutex::new(file) }
    }

    fn line(record: &Record) -> String {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::line(record);

        if record.level() <= Level::Warn {
            eprint!("{line}");
        }
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the file logger at `level`. Only the first call wins.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), SetLoggerError> {
    start();
    let logger = LOGGER.get_or_init(|| FileLogger::new(path, level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
