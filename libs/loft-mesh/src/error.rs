//! # Error Types
//!
//! Error types for profile and mesh generation. Degenerate geometry that the
//! pipeline knows how to skip (zero-length edges, collapsed quads) never
//! surfaces here; only conditions that make a result unusable do.

use config::settings::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building profiles and meshes.
///
/// ## Example
///
/// ```rust
/// use loft_mesh::{ContourProfile, MeshError};
///
/// match ContourProfile::new(Vec::new()) {
///     Err(MeshError::EmptyProfile) => {}
///     _ => unreachable!("an empty point set is rejected"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A profile was constructed from zero points.
    #[error("Cannot create a profile with no points")]
    EmptyProfile,

    /// No point of the profile could be placed on the 0° seam.
    #[error("Profile has no point on the seam")]
    MissingSeam,

    /// Two profiles or layers that must match point-for-point do not.
    #[error("Point count mismatch: expected {expected}, found {found}")]
    PointCountMismatch {
        /// Point count of the reference profile
        expected: usize,
        /// Point count of the offending profile
        found: usize,
    },

    /// The top and bottom adapters disagree on their vertex count, the loft
    /// cannot be stitched.
    #[error("Adapter mismatch: top has {top} points, bottom has {bottom}")]
    AdapterMismatch {
        /// Point count of the top adapter
        top: usize,
        /// Point count of the bottom adapter
        bottom: usize,
    },

    /// A shape parameter is outside its valid range.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the offending parameter
        message: String,
    },

    /// Geometry too degenerate to produce a result.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degeneracy
        message: String,
    },

    /// Invalid settings snapshot.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for profile and mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::AdapterMismatch { top: 12, bottom: 14 };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("14"));

        let err = MeshError::invalid_parameter("length must be positive");
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidResolution(2).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
