//! Errors at the host boundary. The simulation itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tuning config: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("bad value for {flag}: {value:?}")]
    BadArgument { flag: &'static str, value: String },
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(std::io::Error),
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("shared state lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}
