//! Validated settings snapshot shared between the loft crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can stay declarative.

use std::fmt;

use crate::constants::{
    COLLIDER_SUBDIVISIONS, DEFAULT_CYLINDER_RESOLUTION, DEFAULT_SUBDIVISIONS, MIN_POLYGON_SIDES,
};

/// Upper bound on interpolated layers, keeps a runaway slider from
/// allocating an absurd mesh.
///
/// # Examples
/// ```
/// use config::settings::MAX_SUBDIVISIONS;
/// assert!(MAX_SUBDIVISIONS >= 16);
/// ```
pub const MAX_SUBDIVISIONS: u32 = 64;

/// Immutable snapshot of the tessellation settings used by the mesh builder.
///
/// # Examples
/// ```
/// use config::settings::LoftSettings;
/// let settings = LoftSettings::default();
/// assert_eq!(settings.collider_subdivisions, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoftSettings {
    /// Interpolated layers between the top and bottom of a visual loft.
    pub subdivisions: u32,
    /// Interpolated layers between the top and bottom of a collision loft.
    pub collider_subdivisions: u32,
    /// Segment count of cylinder sections.
    pub cylinder_resolution: u32,
}

impl LoftSettings {
    /// Builds settings enforcing strict validation of every count.
    ///
    /// # Examples
    /// ```
    /// use config::settings::LoftSettings;
    /// let settings = LoftSettings::new(4, 2, 32).expect("valid settings");
    /// assert_eq!(settings.subdivisions, 4);
    /// ```
    pub fn new(
        subdivisions: u32,
        collider_subdivisions: u32,
        cylinder_resolution: u32,
    ) -> Result<Self, ConfigError> {
        if subdivisions > MAX_SUBDIVISIONS {
            return Err(ConfigError::TooManySubdivisions(subdivisions));
        }
        if collider_subdivisions > MAX_SUBDIVISIONS {
            return Err(ConfigError::TooManySubdivisions(collider_subdivisions));
        }
        if cylinder_resolution < MIN_POLYGON_SIDES {
            return Err(ConfigError::InvalidResolution(cylinder_resolution));
        }
        Ok(Self {
            subdivisions,
            collider_subdivisions,
            cylinder_resolution,
        })
    }
}

impl Default for LoftSettings {
    fn default() -> Self {
        Self {
            subdivisions: DEFAULT_SUBDIVISIONS,
            collider_subdivisions: COLLIDER_SUBDIVISIONS,
            cylinder_resolution: DEFAULT_CYLINDER_RESOLUTION,
        }
    }
}

/// Error returned when invalid settings are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a subdivision count exceeds [`MAX_SUBDIVISIONS`].
    TooManySubdivisions(u32),
    /// Raised when a segment count is too small to form a polygon.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManySubdivisions(value) => {
                write!(f, "subdivisions must be <= {MAX_SUBDIVISIONS}: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_POLYGON_SIDES}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
