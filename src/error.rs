use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Lifecycle contract violations. Both are caller misuse, surfaced
    // synchronously from the offending call and never retried.
    #[error("An animation is already in progress")]
    AnimationInProgress,

    #[error("No animation is running")]
    NoAnimationRunning,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Animation task failed: {0}")]
    AnimationTask(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an animation task error from a failed join
    pub fn animation_task_error(msg: impl Into<String>) -> Self {
        Self::AnimationTask(msg.into())
    }

    /// Check if error is a lifecycle contract violation rather than a
    /// runtime failure
    #[allow(dead_code)]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AppError::AnimationInProgress | AppError::NoAnimationRunning
        )
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::AnimationTask(err.to_string())
    }
}
