use syzygy_core::{EclipseError, FluxSample, Mode, SimConfig, Viewport};
use syzygy_export::{default_file_name, export_curve, ExportError};
use syzygy_scenes::defaults::{builtin_config, builtin_scenes};
use syzygy_scenes::preset::find;
use syzygy_scenes::{LoadError, ScenePreset};
use syzygy_sim::{RunState, Simulator};

use crate::view::GeometryView;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Config(#[from] EclipseError),
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("unknown scene '{0}'")]
    UnknownScene(String),
    #[error("unknown mode '{0}' (expected solar or lunar)")]
    UnknownMode(String),
    #[error("csv export failed: {0}")]
    Export(#[from] ExportError),
    #[error("geometry serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Browser-side state: the built-in presets and the simulator they drive.
/// The page's animation loop calls `tick` once per frame.
pub struct Session {
    base: SimConfig,
    presets: Vec<ScenePreset>,
    scene: Option<String>,
    sim: Simulator,
}

impl Session {
    pub fn new() -> Result<Self, SessionError> {
        let base = builtin_config()?;
        let presets = builtin_scenes()?;
        let sim = Simulator::new(base)?;
        Ok(Self {
            base,
            presets,
            scene: None,
            sim,
        })
    }

    pub fn simulator(&self) -> &Simulator {
        &self.sim
    }

    pub fn scene_names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    /// Replace the simulator with one configured by the named preset. The
    /// current viewport is kept.
    pub fn load_scene(&mut self, name: &str) -> Result<(), SessionError> {
        let preset = find(&self.presets, name)
            .ok_or_else(|| SessionError::UnknownScene(name.to_string()))?;
        let base = SimConfig {
            viewport: self.sim.config().viewport,
            ..self.base
        };
        self.sim = Simulator::new(preset.apply_to(&base))?;
        self.scene = Some(preset.name.clone());
        log::info!("Loaded scene '{}'", preset.name);
        Ok(())
    }

    pub fn set_mode(&mut self, name: &str) -> Result<(), SessionError> {
        let mode =
            Mode::from_name(name).ok_or_else(|| SessionError::UnknownMode(name.to_string()))?;
        self.sim.set_mode(mode);
        Ok(())
    }

    pub fn set_impact_parameter(&mut self, value: f64) {
        self.sim.update_parameters(|p| p.impact_parameter = value);
    }

    pub fn set_moon_distance_scale(&mut self, value: f64) {
        self.sim.update_parameters(|p| p.moon_distance_scale = value);
    }

    pub fn set_limb_darkening(&mut self, enabled: bool) {
        self.sim.update_parameters(|p| p.limb_darkening_enabled = enabled);
    }

    pub fn set_sample_grid_size(&mut self, size: u32) {
        self.sim.update_parameters(|p| p.sample_grid_size = size);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<(), SessionError> {
        Ok(self.sim.set_viewport(Viewport::new(width, height))?)
    }

    pub fn start(&mut self) -> bool {
        self.sim.start()
    }

    pub fn pause(&mut self) -> bool {
        self.sim.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.sim.resume()
    }

    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// One frame. True when a sample was appended.
    pub fn tick(&mut self) -> Result<bool, SessionError> {
        Ok(self.sim.tick()?.is_some())
    }

    pub fn step(&mut self) -> Result<bool, SessionError> {
        Ok(self.sim.step()?.is_some())
    }

    pub fn state(&self) -> RunState {
        self.sim.state()
    }

    pub fn samples(&self) -> &[FluxSample] {
        self.sim.light_curve().samples()
    }

    /// Geometry of the latest sample, or of the sweep start before any.
    pub fn geometry(&self) -> Result<GeometryView, SessionError> {
        match self.sim.last_evaluation() {
            Some(eval) => Ok(GeometryView::from(eval)),
            None => Ok(GeometryView::from(&self.sim.preview(self.sim.progress())?)),
        }
    }

    /// Geometry at an arbitrary point of the sweep, without recording.
    pub fn preview(&self, progress: f64) -> Result<GeometryView, SessionError> {
        Ok(GeometryView::from(&self.sim.preview(progress)?))
    }

    pub fn export_csv(&self) -> Result<String, SessionError> {
        Ok(export_curve(self.samples(), self.sim.parameters().mode)?)
    }

    pub fn csv_file_name(&self) -> String {
        default_file_name(self.sim.parameters().mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new().expect("builtin data is valid")
    }

    #[test]
    fn test_scene_names_listed() {
        let s = session();
        let names: Vec<_> = s.scene_names().collect();
        assert!(names.contains(&"solar-central"));
        assert!(names.contains(&"lunar-total"));
    }

    #[test]
    fn test_load_scene_keeps_viewport() {
        let mut s = session();
        s.set_viewport(400.0, 400.0).expect("valid viewport");
        s.load_scene("lunar-partial").expect("known scene");
        assert_eq!(s.scene(), Some("lunar-partial"));
        assert_eq!(s.simulator().config().viewport, Viewport::new(400.0, 400.0));
        assert_eq!(s.simulator().parameters().mode, Mode::Lunar);
        assert_eq!(s.state(), RunState::Idle);
        assert!(matches!(
            s.load_scene("nope"),
            Err(SessionError::UnknownScene(_))
        ));
    }

    #[test]
    fn test_frame_loop_fills_curve() {
        let mut s = session();
        assert!(!s.tick().expect("idle tick"));
        assert!(s.start());
        while s.state() == RunState::Running {
            s.tick().expect("tick");
        }
        assert_eq!(s.state(), RunState::Finished);
        assert_eq!(s.samples().len(), 201);

        let csv = s.export_csv().expect("csv");
        assert!(csv.starts_with("time,flux\n"));
        assert_eq!(csv.lines().count(), 202);
        assert_eq!(s.csv_file_name(), "solar_light_curve.csv");
    }

    #[test]
    fn test_mode_switch_by_name() {
        let mut s = session();
        s.step().expect("step");
        s.set_mode("Lunar").expect("known mode");
        assert_eq!(s.state(), RunState::Idle);
        assert!(s.samples().is_empty());
        assert!(s
            .export_csv()
            .expect("csv")
            .starts_with("time,flux,umbra_frac,penumbra_frac\n"));
        assert!(matches!(
            s.set_mode("galactic"),
            Err(SessionError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_geometry_before_and_after_sampling() {
        let mut s = session();
        let start = s.geometry().expect("preview at start");
        assert_eq!(start.flux, 1.0);
        assert_eq!(start.kind, "none");

        let mid = s.preview(0.5).expect("preview");
        assert_eq!(mid.kind, "annular");
        assert!(s.samples().is_empty());

        s.step().expect("step");
        let json = s.geometry().expect("geometry").to_json().expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let sun_radius = value["sunRadius"].as_f64().expect("number");
        assert!((sun_radius - 180.0).abs() < 1e-9);
        assert!(value["umbraRadius"].is_null());
        assert_eq!(value["mode"], "solar");
    }

    #[test]
    fn test_invalid_parameter_surfaces_error() {
        let mut s = session();
        s.set_sample_grid_size(0);
        s.start();
        assert!(matches!(
            s.tick(),
            Err(SessionError::Config(EclipseError::ZeroSampleGrid))
        ));
        assert_eq!(s.state(), RunState::Paused);
        s.set_sample_grid_size(64);
        assert!(s.resume());
        assert!(s.tick().expect("recovered"));
    }
}
