//! Error types for cloth and body construction.
//!
//! Only construction can fail. Stepping, collision and deformation treat
//! degenerate input as a no-op so a frame is never aborted.

use core::fmt;

/// Invalid configuration detected when building a mesh or a body.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Column and row counts must both be at least 1.
    InvalidGridDimensions { cols: usize, rows: usize },
    /// Cloth width and height must be positive and finite.
    InvalidClothSize,
    /// Sphere radius must be positive and finite.
    InvalidRadius,
    /// Every box half extent must be positive and finite.
    InvalidHalfExtent,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidGridDimensions { cols, rows } => {
                write!(f, "cloth grid must be at least 1x1 (got {}x{})", cols, rows)
            }
            PhysicsError::InvalidClothSize => write!(f, "cloth width and height must be positive"),
            PhysicsError::InvalidRadius => write!(f, "sphere radius must be positive"),
            PhysicsError::InvalidHalfExtent => write!(f, "box half extents must be positive"),
        }
    }
}
