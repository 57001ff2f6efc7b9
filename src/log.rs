// src/log.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn log_path() -> &'static Path {
    LOG_PATH.get_or_init(|| {
        let dir = PathBuf::from(STORE_DIR);
        let _ = fs::create_dir_all(&dir);
        dir.join(LOG_FILE)
    })
}

/// Anchor the elapsed clock; call once at startup so timestamps count from launch.
pub fn init() {
    let _ = start();
    let _ = log_path();
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

fn format_line(elapsed_ms: u128, level: &str, msg: &str) -> String {
    format!("[{}][{level}] {msg}\n", fmt_elapsed(elapsed_ms))
}

/// Internal logging function. Never fails the caller.
pub fn write_log(level: &str, msg: &str) {
    let line = format_line(start().elapsed().as_millis(), level, msg);

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path())
        {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
