use thiserror::Error;

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug, Error)]
pub enum ShortcutError {
    /// Shortcut for the given action was not found.
    #[error("Shortcut not found for action: {0}")]
    NotFound(String),
    /// The shortcut keys conflict with an existing binding.
    #[error("Shortcut conflict: {0}")]
    Conflict(String),
    /// The provided key combination is invalid.
    #[error("Invalid shortcut keys: {0}")]
    InvalidKeys(String),
    /// The action name is not one the workspace knows how to run.
    #[error("Unknown shortcut action: {0}")]
    UnknownAction(String),
}

// === BackendError ===

/// Errors returned by calls to the AI backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Backend network error: {0}")]
    NetworkError(String),
    /// The backend answered with a non-success HTTP status.
    #[error("Backend returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The backend answered `success: false`.
    #[error("Backend rejected request: {0}")]
    Rejected(String),
    /// The response body did not have the expected shape.
    #[error("Backend response parse error: {0}")]
    ParseError(String),
    /// The configured base URL cannot be used.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}
