/// Convenience result type used across trellis.
pub type TrellisResult<T> = Result<T, TrellisError>;

/// Errors raised by the layers around the layout engine.
///
/// The engine itself never fails: degenerate configuration lays out as an empty grid.
/// These errors come from loading and validating layout documents.
#[derive(thiserror::Error, Debug)]
pub enum TrellisError {
    /// Invalid user-provided layout configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing layout documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrellisError {
    /// Build a [`TrellisError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrellisError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TrellisError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
