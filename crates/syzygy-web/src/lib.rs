//! Browser bindings for the eclipse simulator.
//!
//! Drawing, DOM wiring and downloads stay in JavaScript. The page owns the
//! animation loop and calls `tick` once per frame:
//!
//! ```javascript
//! const sim = new EclipseSimulator();
//! sim.load_scene("solar-total");
//! sim.start();
//! function frame() {
//!   sim.tick();
//!   draw(JSON.parse(sim.geometry_json()), sim.times(), sim.fluxes());
//!   if (sim.state() === "running") requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

pub mod session;
pub mod view;

use js_sys::{Array, Float64Array};
use wasm_bindgen::prelude::*;

use session::{Session, SessionError};
use syzygy_core::FluxSample;

/// WASM entry point. Sets the panic hook and initializes logging.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("syzygy starting...");
}

fn to_js(e: SessionError) -> JsError {
    log::error!("{e}");
    JsError::new(&e.to_string())
}

fn series(samples: &[FluxSample], field: fn(&FluxSample) -> f64) -> Float64Array {
    let values: Vec<f64> = samples.iter().map(field).collect();
    Float64Array::from(values.as_slice())
}

#[wasm_bindgen]
pub struct EclipseSimulator {
    session: Session,
}

#[wasm_bindgen]
impl EclipseSimulator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<EclipseSimulator, JsError> {
        let session = Session::new().map_err(to_js)?;
        Ok(Self { session })
    }

    pub fn scene_names(&self) -> Array {
        self.session.scene_names().map(JsValue::from_str).collect()
    }

    pub fn load_scene(&mut self, name: &str) -> Result<(), JsError> {
        self.session.load_scene(name).map_err(to_js)
    }

    /// "solar" or "lunar". Switching mode resets the run.
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        self.session.set_mode(mode).map_err(to_js)
    }

    pub fn set_impact_parameter(&mut self, value: f64) {
        self.session.set_impact_parameter(value);
    }

    pub fn set_moon_distance_scale(&mut self, value: f64) {
        self.session.set_moon_distance_scale(value);
    }

    pub fn set_limb_darkening(&mut self, enabled: bool) {
        self.session.set_limb_darkening(enabled);
    }

    pub fn set_sample_grid_size(&mut self, size: u32) {
        self.session.set_sample_grid_size(size);
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<(), JsError> {
        self.session.set_viewport(width, height).map_err(to_js)
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn pause(&mut self) -> bool {
        self.session.pause()
    }

    pub fn resume(&mut self) -> bool {
        self.session.resume()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Advance one frame. Errors pause the run.
    pub fn tick(&mut self) -> Result<bool, JsError> {
        self.session.tick().map_err(to_js)
    }

    pub fn step(&mut self) -> Result<bool, JsError> {
        self.session.step().map_err(to_js)
    }

    pub fn state(&self) -> String {
        self.session.state().name().to_string()
    }

    pub fn time(&self) -> f64 {
        self.session.simulator().time()
    }

    pub fn progress(&self) -> f64 {
        self.session.simulator().progress()
    }

    pub fn sample_count(&self) -> usize {
        self.session.samples().len()
    }

    pub fn times(&self) -> Float64Array {
        series(self.session.samples(), |s| s.time)
    }

    pub fn fluxes(&self) -> Float64Array {
        series(self.session.samples(), |s| s.flux)
    }

    pub fn umbra_fractions(&self) -> Float64Array {
        series(self.session.samples(), |s| s.umbra_fraction)
    }

    pub fn penumbra_fractions(&self) -> Float64Array {
        series(self.session.samples(), |s| s.penumbra_fraction)
    }

    pub fn geometry_json(&self) -> Result<String, JsError> {
        let view = self.session.geometry().map_err(to_js)?;
        view.to_json().map_err(|e| to_js(e.into()))
    }

    pub fn preview_json(&self, progress: f64) -> Result<String, JsError> {
        let view = self.session.preview(progress).map_err(to_js)?;
        view.to_json().map_err(|e| to_js(e.into()))
    }

    pub fn export_csv(&self) -> Result<String, JsError> {
        self.session.export_csv().map_err(to_js)
    }

    pub fn csv_file_name(&self) -> String {
        self.session.csv_file_name()
    }
}
