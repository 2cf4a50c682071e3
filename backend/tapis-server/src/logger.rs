use crate::error::{Result as ServerErrorResult, ServerError};

use tapis_config::LogLevel;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Crates whose info output would drown out login traffic
const NOISY_TARGETS: &[(&str, LevelFilter)] = &[
    ("sqlx", LevelFilter::Warn),
    ("hyper_util", LevelFilter::Warn),
    ("reqwest", LevelFilter::Warn),
];

/// Where log lines go
#[derive(Debug)]
pub(crate) enum LogSink {
    File { path: PathBuf, file: File },
    ColoredStdout,
    PlainStdout,
}

impl LogSink {
    /// A configured file wins; color only applies to stdout
    pub(crate) fn select(log_file: Option<PathBuf>, colored: bool) -> ServerErrorResult<Self> {
        match log_file {
            Some(path) => {
                let file = open_log_file(&path)?;
                Ok(Self::File { path, file })
            }
            None if colored => Ok(Self::ColoredStdout),
            None => Ok(Self::PlainStdout),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File { path, .. } => format!("file={}", path.display()),
            Self::ColoredStdout => "stdout (colored)".to_string(),
            Self::PlainStdout => "stdout".to_string(),
        }
    }

    fn into_dispatch(self) -> Dispatch {
        match self {
            // Files keep source locations for post-mortems
            Self::File { file, .. } => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}:{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.file().unwrap_or("unknown"),
                        record.line().unwrap_or(0),
                    ))
                })
                .chain(file),
            Self::ColoredStdout => {
                let colors = ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red);

                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!(
                            "[{} - {}] {} [{}]",
                            humantime::format_rfc3339(SystemTime::now()),
                            colors.color(record.level()),
                            message,
                            record.target(),
                        ))
                    })
                    .chain(std::io::stdout())
            }
            Self::PlainStdout => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        message,
                        record.target(),
                    ))
                })
                .chain(std::io::stdout()),
        }
    }
}

pub(crate) fn open_log_file(path: &Path) -> ServerErrorResult<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

/// Install the global fern logger for the bridge.
///
/// Must run once, before anything else logs.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let sink = LogSink::select(log_file, colored)?;
    let destination = sink.describe();

    let base = NOISY_TARGETS
        .iter()
        .fold(Dispatch::new().level(level_filter), |dispatch, (target, cap)| {
            dispatch.level_for(*target, (*cap).min(level_filter))
        });

    base.chain(sink.into_dispatch())
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={}, {}", level_filter, destination);

    // Route tracing events from dependencies into the same output
    tracing_log::LogTracer::init().ok();

    Ok(())
}
