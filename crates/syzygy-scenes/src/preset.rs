use serde::{Deserialize, Serialize};
use syzygy_core::{SimConfig, SimulationParameters, Timing};

/// A named starting point for a run. Fields left out of the RON fall back to
/// `SimulationParameters::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePreset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: SimulationParameters,
    /// Overrides the base timing when present.
    #[serde(default)]
    pub timing: Option<Timing>,
}

impl ScenePreset {
    /// Layer this preset over `base`. Constants, optics and viewport come from
    /// the base; the run always starts at the beginning of the sweep.
    pub fn apply_to(&self, base: &SimConfig) -> SimConfig {
        SimConfig {
            parameters: SimulationParameters {
                time_progress: 0.0,
                ..self.parameters
            },
            timing: self.timing.unwrap_or(base.timing),
            ..*base
        }
    }
}

/// Find a preset by name.
pub fn find<'a>(presets: &'a [ScenePreset], name: &str) -> Option<&'a ScenePreset> {
    presets.iter().find(|p| p.name == name)
}
