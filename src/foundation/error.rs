/// Convenience result type used across the crate.
pub type GuillocheResult<T> = Result<T, GuillocheError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum GuillocheError {
    /// Invalid user-provided parameters, canvas sizes or CLI values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or writing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Window, surface or video-mode failures.
    #[error("display error: {0}")]
    Display(String),

    /// Errors when serializing or deserializing parameter files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GuillocheError {
    /// Build a [`GuillocheError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GuillocheError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GuillocheError::Display`] value.
    pub fn display(msg: impl Into<String>) -> Self {
        Self::Display(msg.into())
    }

    /// Build a [`GuillocheError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
