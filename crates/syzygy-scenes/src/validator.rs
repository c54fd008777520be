use std::collections::HashSet;

use syzygy_core::{EclipseError, SimConfig};
use thiserror::Error;

use crate::preset::ScenePreset;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate scene name '{0}'")]
    DuplicateScene(String),
    #[error("Scene '{name}' is invalid: {source}")]
    InvalidScene { name: String, source: EclipseError },
    #[error("Scene with empty name at position {0}")]
    EmptyName(usize),
    #[error("Scene name '{0}' may only use letters, digits, '-' and '_'")]
    UnsafeName(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(EclipseError),
}

/// Validate a base configuration.
pub fn validate_config(config: &SimConfig) -> Result<(), Vec<ValidationError>> {
    config
        .validate()
        .map_err(|e| vec![ValidationError::InvalidConfig(e)])
}

/// Scene names become file-name prefixes, so they stay inside one path
/// component.
fn is_file_safe(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validate presets against a base configuration. Every problem is reported,
/// not just the first.
pub fn validate_scenes(
    scenes: &[ScenePreset],
    base: &SimConfig,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (i, scene) in scenes.iter().enumerate() {
        if scene.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(i));
        } else if !is_file_safe(&scene.name) {
            errors.push(ValidationError::UnsafeName(scene.name.clone()));
        } else if !seen.insert(scene.name.as_str()) {
            errors.push(ValidationError::DuplicateScene(scene.name.clone()));
        }
    }

    for scene in scenes {
        if let Err(source) = scene.apply_to(base).validate() {
            errors.push(ValidationError::InvalidScene {
                name: scene.name.clone(),
                source,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            log::error!("{e}");
        }
        Err(errors)
    }
}
