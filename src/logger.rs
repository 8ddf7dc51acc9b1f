// Minimal leveled logger shared by both build tools.
// Deliberately dependency-free: these tools run inside build scripts where a
// single stderr stream is all the observability needed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static DEBUG: AtomicBool = AtomicBool::new(false);

// Set the global log level based on the --debug flag.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

// Returns true if debug logging is enabled.
pub fn is_debug() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

// Print an INFO-level message.
#[allow(dead_code)]
pub fn info(msg: &str) {
    log_line("INFO", msg);
}

// Print a DEBUG-level message if enabled.
pub fn debug(msg: &str) {
    if is_debug() {
        log_line("DEBUG", msg);
    }
}

// Log lines carry a unix timestamp and a short label.
fn log_line(level: &str, msg: &str) {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    eprintln!("[{}] {} {}", level, ts, msg);
}
