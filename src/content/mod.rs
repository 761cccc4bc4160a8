//! Content domain: loads gameplay tunables from RON and hands them to the
//! other domains as resources.

mod data;
mod loader;
mod validation;

pub use data::GameplayDefaults;
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_single};
pub use validation::{ValidationError, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let defaults = resolve_defaults(Path::new(CONTENT_DIR));

        app.insert_resource(defaults.movement)
            .insert_resource(defaults.camera)
            .insert_resource(defaults.delivery)
            .insert_resource(defaults.hud);
    }
}

/// Load and validate gameplay defaults, falling back to built-in values
/// when the file is missing, malformed or invalid.
pub fn resolve_defaults(base_path: &Path) -> GameplayDefaults {
    let defaults = match load_gameplay_defaults(base_path) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in gameplay defaults", e);
            return GameplayDefaults::default();
        }
    };

    let errors = validate_defaults(&defaults);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid gameplay default: {}", e);
        }
        return GameplayDefaults::default();
    }

    info!(
        "Loaded gameplay defaults (schema v{})",
        defaults.schema_version
    );
    defaults
}
