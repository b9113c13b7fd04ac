/// Convenience result type used across boloto.
pub type BolotoResult<T> = Result<T, BolotoError>;

/// Top-level error taxonomy.
///
/// Figure geometry and color derivation never fail; errors only come from the edges: show
/// configuration, rasterizer limits and frame output.
#[derive(thiserror::Error, Debug)]
pub enum BolotoError {
    /// Invalid user-provided show configuration or parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a recorded frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to an output sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BolotoError {
    /// Build a [`BolotoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BolotoError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BolotoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BolotoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
