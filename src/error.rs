//! Error types for map generation

use std::fmt;

/// Errors that can occur during map generation or queries
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// The subdivision engine could not build a diagram at all
    GenerationFailed(String),
    /// A site's cell polygon or centroid could not be computed.
    ///
    /// Always recoverable: callers log and skip the affected site.
    DegenerateCell(usize),
    /// An elevation field computed under a different index epoch was
    /// offered to an operation that consumes site indices
    StaleElevation {
        /// Epoch the generator is currently at
        expected: u64,
        /// Epoch the rejected field was computed under
        actual: u64,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            MapError::GenerationFailed(msg) => write!(f, "generation failed: {}", msg),
            MapError::DegenerateCell(index) => write!(f, "degenerate cell at site {}", index),
            MapError::StaleElevation { expected, actual } => write!(
                f,
                "stale elevation field: computed at epoch {} but generator is at epoch {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for MapError {}

/// Result type alias for map generation operations
pub type Result<T> = std::result::Result<T, MapError>;
