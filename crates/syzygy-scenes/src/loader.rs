use syzygy_core::SimConfig;
use thiserror::Error;

use crate::preset::ScenePreset;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse config RON: {0}")]
    ConfigParseError(String),
    #[error("Failed to parse scenes RON: {0}")]
    SceneParseError(String),
}

/// Parse a `SimConfig` from a RON string. Omitted sections take defaults.
pub fn load_config_from_str(ron_str: &str) -> Result<SimConfig, LoadError> {
    let options = ron::Options::default();
    options.from_str(ron_str).map_err(|e| {
        log::error!("config parse failed: {e}");
        LoadError::ConfigParseError(e.to_string())
    })
}

/// Parse a list of scene presets from a RON string.
pub fn load_scenes_from_str(ron_str: &str) -> Result<Vec<ScenePreset>, LoadError> {
    let options = ron::Options::default();
    options.from_str(ron_str).map_err(|e| {
        log::error!("scene parse failed: {e}");
        LoadError::SceneParseError(e.to_string())
    })
}

/// Load and concatenate several scene sources, in order.
pub fn load_all_scenes(sources: &[&str]) -> Result<Vec<ScenePreset>, LoadError> {
    let mut all_scenes = Vec::new();
    for source in sources {
        all_scenes.extend(load_scenes_from_str(source)?);
    }
    Ok(all_scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syzygy_core::{Mode, Timing};

    #[test]
    fn test_load_single_scene() {
        let ron = r#"[
            (
                name: "grazing",
                parameters: (mode: Solar, impact_parameter: 0.8),
            ),
        ]"#;
        let scenes = load_scenes_from_str(ron).expect("should parse");
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].name, "grazing");
        assert_eq!(scenes[0].description, "");
        assert_eq!(scenes[0].parameters.impact_parameter, 0.8);
        assert_eq!(scenes[0].parameters.sample_grid_size, 64);
        assert_eq!(scenes[0].timing, None);
    }

    #[test]
    fn test_load_scene_with_timing() {
        let ron = r#"[
            (
                name: "short",
                parameters: (mode: Lunar),
                timing: Some((duration: 10.0, time_step: 1.0)),
            ),
        ]"#;
        let scenes = load_scenes_from_str(ron).expect("should parse");
        assert_eq!(scenes[0].parameters.mode, Mode::Lunar);
        assert_eq!(
            scenes[0].timing,
            Some(Timing {
                duration: 10.0,
                time_step: 1.0
            })
        );
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = load_config_from_str("(timing: (duration: 20.0))").expect("should parse");
        assert_eq!(config.timing.duration, 20.0);
        assert_eq!(config.timing.time_step, Timing::default().time_step);
        assert_eq!(config.constants, SimConfig::default().constants);
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let ron = r#"[this is not valid RON {"#;
        assert!(matches!(
            load_scenes_from_str(ron),
            Err(LoadError::SceneParseError(_))
        ));
        assert!(matches!(
            load_config_from_str(ron),
            Err(LoadError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let ron = r#"[(name: "x", parameters: (mode: Stellar))]"#;
        assert!(load_scenes_from_str(ron).is_err());
    }

    #[test]
    fn test_load_all_merges() {
        let src1 = r#"[(name: "a")]"#;
        let src2 = r#"[(name: "b"), (name: "c", parameters: (mode: Lunar))]"#;
        let scenes = load_all_scenes(&[src1, src2]).expect("should merge");
        let names: Vec<_> = scenes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
