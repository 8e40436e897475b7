use std::fmt;

use decilog_types::InvalidRecordError;

/// Result type for decilog-store operations
pub type Result<T> = std::result::Result<T, LoadError>;

/// Error types that can occur while loading the decision log.
///
/// All variants are terminal for the load that raised them; the source is
/// static, so a retry cannot change the outcome.
#[derive(Debug)]
pub enum LoadError {
    /// IO operation failed (source unreadable)
    Io(std::io::Error),

    /// JSON parsing failed (malformed source or schema violation)
    Json(serde_json::Error),

    /// A record violates a data-model invariant
    Record(InvalidRecordError),

    /// Two records share the same id
    DuplicateId(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "IO error: {}", err),
            LoadError::Json(err) => write!(f, "JSON error: {}", err),
            LoadError::Record(err) => write!(f, "Invalid record: {}", err),
            LoadError::DuplicateId(id) => write!(f, "Duplicate record id: '{}'", id),
            LoadError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Json(err) => Some(err),
            LoadError::Record(err) => Some(err),
            LoadError::DuplicateId(_) | LoadError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Json(err)
    }
}

impl From<InvalidRecordError> for LoadError {
    fn from(err: InvalidRecordError) -> Self {
        LoadError::Record(err)
    }
}

impl From<toml::de::Error> for LoadError {
    fn from(err: toml::de::Error) -> Self {
        LoadError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LoadError {
    fn from(err: toml::ser::Error) -> Self {
        LoadError::Config(err.to_string())
    }
}
