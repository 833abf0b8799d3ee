use crate::{BoardError, BoardResult};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use kb_config::LogLevel;
use log::{Record, debug};

/// Initialize logger with fern
///
/// stdout carries command output, so console logging goes to stderr.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(log_level: LogLevel, log_file: Option<PathBuf>, colored: bool) -> BoardResult<()> {
    let level_filter = log_level.0;

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = fern::log_file(log_path).map_err(|e| {
            BoardError::logger(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_line(message, record, record.level())))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{}",
                    format_line(message, record, colors.color(record.level()))
                ))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", format_line(message, record, record.level())))
            })
            .chain(std::io::stderr())
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| BoardError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        None => debug!("Logger initialized: level={}, stderr", log_level),
    }

    Ok(())
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn format_line<L: std::fmt::Display>(
    message: &std::fmt::Arguments,
    record: &Record,
    level: L,
) -> String {
    format!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    )
}
