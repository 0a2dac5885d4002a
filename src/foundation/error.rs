/// Convenience result type used across cardflow.
pub type CardflowResult<T> = Result<T, CardflowError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum CardflowError {
    /// Invalid user-provided configuration or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry the rasterizer cannot handle, e.g. projected card edges that are not vertical
    /// because the camera rolls or pitches.
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Errors while decoding or rasterizing card images.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardflowError {
    /// Build a [`CardflowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardflowError::Precondition`] value.
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Build a [`CardflowError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Whether this error is a geometry precondition failure rather than a data problem.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
