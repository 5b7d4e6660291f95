use std::path::Path;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};

const DEFAULT_LOG_FILE: &str = "mazegen.log";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("cannot open log file: {0}")]
    Open(#[from] InitError),
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or to `log_file` through a non-blocking writer. The returned guard
/// flushes that writer on drop and must be held until the program exits.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<Option<WorkerGuard>, LogError> {
    let builder = tracing_subscriber::fmt().with_max_level(level);
    let Some(path) = log_file else {
        builder.with_writer(std::io::stderr).init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    builder.with_writer(writer).with_ansi(false).init();
    Ok(Some(guard))
}
