// src/error.rs

/// Errors raised by the geometry core.
///
/// Every variant is reported at the point of the offending call. Generators
/// validate their inputs before emitting anything, so a failed call never
/// leaves a half-filled buffer behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The caller handed us something we cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An interactive buffer has no room for the requested vertices.
    #[error("capacity exceeded: {requested} vertices requested, {available} of {capacity} slots free")]
    CapacityExceeded {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    /// A palette lookup outside the palette.
    #[error("color index {index} out of range for a palette of {len} colors")]
    ColorIndexOutOfRange { index: usize, len: usize },
}

impl GeometryError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GeometryError::InvalidInput(msg.into())
    }
}

pub type GeometryResult<T> = Result<T, GeometryError>;
