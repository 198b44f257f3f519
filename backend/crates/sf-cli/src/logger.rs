use crate::{CliError, Result as CliErrorResult};

use sf_config::LogLevel;

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Where log lines go. stdout is reserved for command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr { colored: bool },
    File(PathBuf),
}

impl LogTarget {
    /// A log file wins over the terminal; `colored` only applies to stderr.
    pub fn new(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Stderr { colored },
        }
    }
}

impl Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogTarget::Stderr { .. } => write!(f, "stderr"),
            LogTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// `[rfc3339 - LEVEL] message [file:line]`, shared by every target.
pub fn render_line(
    at: SystemTime,
    level: &dyn Display,
    message: &fmt::Arguments,
    record: &Record,
) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(at),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    )
}

pub fn initialize(log_level: LogLevel, target: LogTarget) -> CliErrorResult<()> {
    let colors = match target {
        LogTarget::Stderr { colored: true } => Some(
            ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red),
        ),
        _ => None,
    };

    let dispatch = Dispatch::new()
        .level(*log_level)
        .format(move |out, message, record| {
            let now = SystemTime::now();
            let line = match colors.as_ref() {
                Some(colors) => render_line(now, &colors.color(record.level()), message, record),
                None => render_line(now, &record.level(), message, record),
            };
            out.finish(format_args!("{line}"))
        });

    let dispatch = match target {
        LogTarget::Stderr { .. } => dispatch.chain(std::io::stderr()),
        LogTarget::File(ref path) => dispatch.chain(open_append(path)?),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={}, target={target}", *log_level);
    Ok(())
}

fn open_append(path: &Path) -> CliErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::io(format!("Failed to create {}", parent.display()), e))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::io(format!("Failed to open log file {}", path.display()), e))
}
