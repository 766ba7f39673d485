//! Error types for the reservation mailer.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Input(#[from] InvalidInputError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Validation failures on a form submission.
///
/// Each variant carries the raw offending value; the processor logs the
/// full submission row before returning one of these, so malformed input
/// can be recovered by hand afterwards.
#[derive(Debug, thiserror::Error)]
pub enum InvalidInputError {
    #[error("invalid adult breakfast count: {raw:?}")]
    AdultCount { raw: String },

    #[error("invalid child breakfast count: {raw:?}")]
    ChildCount { raw: String },

    #[error("invalid shift: {raw:?}")]
    Shift { raw: String },
}

/// Mail transport errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Invalid {field} address: {reason}")]
    InvalidAddress { field: &'static str, reason: String },

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("SMTP transport error: {0}")]
    Transport(String),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
