//! Configuration and scene presets embedded in the binary.

use syzygy_core::SimConfig;

use crate::loader::{load_all_scenes, load_config_from_str, LoadError};
use crate::preset::ScenePreset;

pub const CONFIG_RON: &str = include_str!("../../../data/config.ron");
pub const SOLAR_SCENES_RON: &str = include_str!("../../../data/scenes/solar.ron");
pub const LUNAR_SCENES_RON: &str = include_str!("../../../data/scenes/lunar.ron");

pub fn builtin_config() -> Result<SimConfig, LoadError> {
    load_config_from_str(CONFIG_RON)
}

/// Solar presets first, then lunar.
pub fn builtin_scenes() -> Result<Vec<ScenePreset>, LoadError> {
    load_all_scenes(&[SOLAR_SCENES_RON, LUNAR_SCENES_RON])
}
