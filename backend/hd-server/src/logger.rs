use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Dependencies that log every statement or handshake at `info`/`debug`
const QUIET_TARGETS: &[(&str, LevelFilter)] =
    &[("sqlx", LevelFilter::Warn), ("rustls", LevelFilter::Info)];

/// Where log records end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stdout { colored: bool },
}

impl LogSink {
    /// A file wins over stdout; colors only apply to stdout
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None => Self::Stdout { colored },
        }
    }

    pub(crate) fn dispatch(&self) -> ServerErrorResult<Dispatch> {
        match self {
            Self::File(path) => file_dispatch(path),
            Self::Stdout { colored: true } => Ok(colored_stdout_dispatch()),
            Self::Stdout { colored: false } => Ok(plain_stdout_dispatch()),
        }
    }
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file={}", path.display()),
            Self::Stdout { colored: true } => write!(f, "stdout (colored)"),
            Self::Stdout { colored: false } => write!(f, "stdout"),
        }
    }
}

/// Install the global logger and bridge `tracing` events into it.
pub fn initialize(
    log_level: hd_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let sink = LogSink::select(log_file, colored);

    QUIET_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, (target, cap)| {
            dispatch.level_for(*target, (*cap).min(level_filter))
        })
        .chain(sink.dispatch()?)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={:?}, {}", level_filter, sink);

    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn file_dispatch(path: &Path) -> ServerErrorResult<Dispatch> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = fern::log_file(path).map_err(|e| ServerError::Logger {
        message: format!("Failed to open log file {}: {}", path.display(), e),
    })?;

    // Files keep source locations; stdout keeps the shorter target
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {} [{}:{}]",
                humantime::format_rfc3339_millis(SystemTime::now()),
                record.level(),
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        })
        .chain(file))
}

fn colored_stdout_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {} ({})",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colors.color(record.level()),
                message,
                record.target(),
            ))
        })
        .chain(std::io::stdout())
}

fn plain_stdout_dispatch() -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {} ({})",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                message,
                record.target(),
            ))
        })
        .chain(std::io::stdout())
}
