use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArborError {
    #[error("No such node: {0}")]
    NotFound(String),

    #[error("Node already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid target {path}: {reason}")]
    InvalidTarget { path: String, reason: String },

    #[error("Forbidden on {path}: {reason}")]
    Forbidden { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl ArborError {
    pub fn invalid_target(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTarget {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn forbidden(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Forbidden {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The path the failure refers to, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound(path) | Self::AlreadyExists(path) => Some(path.as_str()),
            Self::InvalidTarget { path, .. } | Self::Forbidden { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;
