use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in passman.
#[derive(Debug, Error)]
pub enum PassmanError {
    // --- Envelope errors ---
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("Invalid password")]
    InvalidPassphrase,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Generator errors ---
    #[error("Dictionary unavailable at {path}: {reason}")]
    DictionaryUnavailable { path: PathBuf, reason: String },

    #[error("Password generation gave up after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Password length {length} is too long (at most {max})")]
    LengthTooLong { length: usize, max: usize },

    // --- Store errors ---
    #[error("Password file not found at {0} (run `passman init` first)")]
    StoreNotFound(PathBuf),

    #[error("Service '{0}' not found")]
    ServiceNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Password cannot be empty")]
    EmptyPassphrase,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Cancelled")]
    UserCancelled,
}

/// Convenience type alias for passman results.
pub type Result<T> = std::result::Result<T, PassmanError>;
