//! Logger module
//!
//! Plain prefixed logging to stdout/stderr:
//! - Server lifecycle logging
//! - Access logging in Common Log Format
//! - Refresher lifecycle logging

mod format;

pub use format::AccessLogEntry;

use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("File poll server started successfully");
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Refresh interval: {}s", config.refresh.interval_secs);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_watched_file(path: &std::path::Path) {
    println!("[Watch] Polling file: {}", path.display());
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_refresh_published(bytes: usize) {
    println!("[Refresh] Published {bytes} bytes");
}

pub fn log_refresh_failed(err: &std::io::Error) {
    eprintln!("[Refresh] Read failed, polling stops: {err}");
}

pub fn log_refresher_stopped(reason: &str) {
    println!("[Refresh] Refresher stopped: {reason}");
}

pub fn log_stop_requested() {
    println!("[Stop] Cancellation requested via /stop");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
