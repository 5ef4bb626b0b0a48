//! Tests for the validated settings snapshot.

use super::*;

#[test]
fn default_settings_are_valid() {
    let settings = LoftSettings::default();
    assert_eq!(settings.subdivisions, DEFAULT_SUBDIVISIONS);
    assert_eq!(settings.collider_subdivisions, COLLIDER_SUBDIVISIONS);
    assert!(settings.cylinder_resolution >= MIN_POLYGON_SIDES);
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        LoftSettings::new(MAX_SUBDIVISIONS + 1, 2, 64).unwrap_err(),
        ConfigError::TooManySubdivisions(MAX_SUBDIVISIONS + 1)
    );
    assert_eq!(
        LoftSettings::new(3, 2, 2).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
}

#[test]
fn error_messages_name_the_limit() {
    let message = ConfigError::InvalidResolution(2).to_string();
    assert!(message.contains(">= 3"));
}
