use std::fmt;
use std::path::PathBuf;
use env_logger::{Env, Target};
use crate::config::RunMode;

pub const DEFAULT_LOG_FILE: &str = "lights_out.log";
pub const LOG_FILE_ENV: &str = "LIGHTS_OUT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

impl fmt::Display for LogDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogDestination::File(path) => write!(f, "{}", path.display()),
            LogDestination::Stderr => write!(f, "stderr"),
        }
    }
}

/// The terminal is in raw mode while playing, so interactive sessions log to
/// a file. Print mode leaves stdout for the board and logs to stderr unless a
/// file is named explicitly.
pub fn destination_for(mode: RunMode, file_override: Option<PathBuf>) -> LogDestination {
    match (mode, file_override) {
        (_, Some(path)) => LogDestination::File(path),
        (RunMode::Interactive, None) => LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE)),
        (RunMode::Print, None) => LogDestination::Stderr,
    }
}

pub fn log_file_override() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV).map(PathBuf::from)
}

/// Filter defaults to `info`, override with `RUST_LOG`.
pub fn init_logging(destination: &LogDestination) -> Result<(), Box<dyn std::error::Error>> {
    let target = match destination {
        LogDestination::File(path) => {
            let log_out = std::fs::OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(path)?;
            Target::Pipe(Box::new(log_out))
        }
        LogDestination::Stderr => Target::Stderr,
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(target)
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
