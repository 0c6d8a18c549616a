use std::fmt;

/// Error type for animal store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store's lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// Reading or writing the backing file failed.
    Io { path: String, message: String },
    /// The backing file could not be encoded or decoded.
    Serde(String),
    /// The id counter cannot advance any further.
    IdsExhausted,
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Io { path, message } => {
                write!(f, "store io error on {}: {}", path, message)
            }
            StoreError::Serde(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::IdsExhausted => write!(f, "store has no ids left to assign"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
