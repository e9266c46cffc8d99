/// Convenience result type used across heartbeam.
pub type HeartResult<T> = Result<T, HeartError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum HeartError {
    /// Invalid user-provided or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A coordinate table file could not be opened or read.
    #[error("file access error: {0}")]
    FileAccess(String),

    /// A coordinate table file does not match the expected two-column shape.
    #[error("format error: {0}")]
    Format(String),

    /// Errors while rasterizing or encoding frames.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HeartError {
    /// Build a [`HeartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HeartError::FileAccess`] value.
    pub fn file_access(msg: impl Into<String>) -> Self {
        Self::FileAccess(msg.into())
    }

    /// Build a [`HeartError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`HeartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
