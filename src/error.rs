use thiserror::Error;

/// Top-level error type for the flexitile engine.
#[derive(Debug, Error)]
pub enum FlexitileError {
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Errors related to the control path and its segment structure.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("control path length {len} is not of the form 3k+1 with k >= 1")]
    InvalidLength { len: usize },

    #[error("segment index {index} is out of range (path has {count} segments)")]
    SegmentOutOfRange { index: usize, count: usize },
}

/// Convenience type alias for results using [`FlexitileError`].
pub type Result<T> = std::result::Result<T, FlexitileError>;
