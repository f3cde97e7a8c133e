//! Log file setup
//!
//! The terminal belongs to the UI, so logs go to a single, never-rotated file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::constants::DEFAULT_LOG_FILE;

/// Split a log path into the directory and file name the appender wants
fn split_log_path(log_file: &Path) -> (PathBuf, String) {
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = log_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(DEFAULT_LOG_FILE));
    (dir, name)
}

/// Open (or create) the log file, failing instead of panicking on a bad path
pub fn file_appender(log_file: &Path) -> Result<RollingFileAppender> {
    let (dir, name) = split_log_path(log_file);
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(&dir)
        .with_context(|| format!("opening log file {}", log_file.display()))
}
