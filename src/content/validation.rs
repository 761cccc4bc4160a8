//! Validation of loaded tunables before they reach the simulation.

use super::data::{GameplayDefaults, SCHEMA_VERSION};

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a numeric condition
macro_rules! check {
    ($errors:expr, $cond:expr, $field:expr, $message:expr) => {
        if !$cond {
            $errors.push(ValidationError {
                field: $field,
                message: $message.to_string(),
            });
        }
    };
}

/// Validate every tunable.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == SCHEMA_VERSION,
        "schema_version",
        format!("must be {}", SCHEMA_VERSION)
    );

    let movement = &defaults.movement;
    check!(
        errors,
        movement.max_speed_floor > 0.0,
        "movement.max_speed_floor",
        "must be positive"
    );
    check!(
        errors,
        movement.speed_buffer >= 0.0,
        "movement.speed_buffer",
        "must not be negative"
    );
    check!(
        errors,
        movement.body_mass > 0.0,
        "movement.body_mass",
        "must be positive"
    );
    check!(
        errors,
        movement.gravity > 0.0,
        "movement.gravity",
        "must be positive"
    );
    check!(
        errors,
        movement.max_glide_angle_degrees > 0.0 && movement.max_glide_angle_degrees < 90.0,
        "movement.max_glide_angle_degrees",
        "must be between 0 and 90"
    );
    check!(
        errors,
        movement.wall_detection_distance > 0.0,
        "movement.wall_detection_distance",
        "must be positive"
    );
    check!(
        errors,
        movement.curvature_radius > 0.0,
        "movement.curvature_radius",
        "must be positive"
    );
    check!(
        errors,
        movement.transition_rays >= 2,
        "movement.transition_rays",
        "needs at least 2 rays"
    );
    check!(
        errors,
        movement.curvature_rays >= 2,
        "movement.curvature_rays",
        "needs at least 2 rays"
    );
    check!(
        errors,
        movement.rewind_sample_period > 0.0,
        "movement.rewind_sample_period",
        "must be positive"
    );
    check!(
        errors,
        movement.rewind_capacity >= 2,
        "movement.rewind_capacity",
        "must hold at least 2 samples"
    );
    check!(
        errors,
        movement.rewind_snap_distance > 0.0,
        "movement.rewind_snap_distance",
        "must be positive"
    );
    check!(
        errors,
        movement.rewind_max_iterations >= 1,
        "movement.rewind_max_iterations",
        "must be at least 1"
    );
    check!(
        errors,
        movement.rewind_max_steps_per_tick > 0.0,
        "movement.rewind_max_steps_per_tick",
        "must be positive"
    );

    check!(
        errors,
        defaults.camera.distance > 0.0,
        "camera.distance",
        "must be positive"
    );
    check!(
        errors,
        defaults.delivery.time_limit > 0.0,
        "delivery.time_limit",
        "must be positive"
    );
    check!(
        errors,
        defaults.hud.speed_refresh_interval > 0.0,
        "hud.speed_refresh_interval",
        "must be positive"
    );

    errors
}
