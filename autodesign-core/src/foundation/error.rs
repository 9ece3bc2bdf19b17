/// Convenience result type used across AutoDesign.
pub type AutodesignResult<T> = Result<T, AutodesignError>;

/// Top-level error taxonomy used by compositor and batch APIs.
///
/// `Config` and `InvalidParameter` are raised before a batch starts. `SourceImage` and `Output`
/// describe a single poster and are collected into the batch report instead of aborting a run.
#[derive(thiserror::Error, Debug)]
pub enum AutodesignError {
    /// Missing or malformed run configuration fields.
    #[error("config error: {0}")]
    Config(String),

    /// Out-of-range numeric or color parameters.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unreadable, corrupt or degenerate input image.
    #[error("source image error: {0}")]
    SourceImage(String),

    /// Failure creating an output directory or writing an output file.
    #[error("output error: {0}")]
    Output(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AutodesignError {
    /// Build a [`AutodesignError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`AutodesignError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`AutodesignError::SourceImage`] value.
    pub fn source_image(msg: impl Into<String>) -> Self {
        Self::SourceImage(msg.into())
    }

    /// Build a [`AutodesignError::Output`] value.
    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }

    /// `true` for errors that only concern one poster of a batch.
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::SourceImage(_) | Self::Output(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
