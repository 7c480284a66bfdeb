use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PRTreeError {
    /// `load` was called on a tree that already holds data.
    #[error("Tree is already loaded")]
    AlreadyLoaded,

    /// A query box with `max < min` on some axis.
    #[error("max: {max} < min: {min}, axis: {axis}")]
    InvalidQuery { axis: usize, min: f64, max: f64 },

    /// A query box or point does not cover every dimension of the tree.
    #[error("Expected at least {expected} dimensions, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Branch factor must be at least 2, got {0}")]
    InvalidBranchFactor(usize),

    #[error("A converter must describe at least 1 dimension, got {0}")]
    InvalidDimensions(usize),

    /// Feature bounds that cannot be indexed.
    #[error("Invalid feature: {0}")]
    InvalidFeature(String),
}

pub type Result<T> = std::result::Result<T, PRTreeError>;
