use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::EclipseError;
use crate::math::{ensure_finite, ensure_in_range, ensure_positive_distance};
use crate::types::{Mode, Viewport};

/// Physical sizes and distances, all in the same length unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    pub sun_radius: f64,
    pub earth_radius: f64,
    pub moon_radius: f64,
    pub earth_sun_distance: f64,
    pub earth_moon_distance: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            sun_radius: SUN_RADIUS_KM,
            earth_radius: EARTH_RADIUS_KM,
            moon_radius: MOON_RADIUS_KM,
            earth_sun_distance: EARTH_SUN_DISTANCE_KM,
            earth_moon_distance: EARTH_MOON_DISTANCE_KM,
        }
    }
}

impl PhysicalConstants {
    pub fn validate(&self) -> Result<(), EclipseError> {
        ensure_positive_distance("sun radius", self.sun_radius)?;
        ensure_positive_distance("earth radius", self.earth_radius)?;
        ensure_positive_distance("moon radius", self.moon_radius)?;
        ensure_positive_distance("earth-sun distance", self.earth_sun_distance)?;
        ensure_positive_distance("earth-moon distance", self.earth_moon_distance)?;
        if self.sun_radius <= self.earth_radius {
            return Err(EclipseError::SunNotLargerThanEarth {
                sun: self.sun_radius,
                earth: self.earth_radius,
            });
        }
        Ok(())
    }
}

/// Per-sample knobs owned and mutated by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    pub mode: Mode,
    /// Vertical offset of the Moon's path as a fraction of the contact distance.
    pub impact_parameter: f64,
    /// Multiplier on the nominal Earth–Moon distance.
    pub moon_distance_scale: f64,
    pub limb_darkening_enabled: bool,
    /// Side length N of the N×N limb-darkening sample grid.
    pub sample_grid_size: u32,
    /// 0 = start of the event, 1 = end.
    pub time_progress: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            mode: Mode::Solar,
            impact_parameter: 0.0,
            moon_distance_scale: 1.0,
            limb_darkening_enabled: false,
            sample_grid_size: DEFAULT_SAMPLE_GRID,
            time_progress: 0.0,
        }
    }
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), EclipseError> {
        ensure_finite("impact parameter", self.impact_parameter)?;
        if self.impact_parameter.abs() > MAX_IMPACT_PARAMETER {
            return Err(EclipseError::ImpactParameterOutOfRange {
                value: self.impact_parameter,
                max: MAX_IMPACT_PARAMETER,
            });
        }

        ensure_finite("moon distance scale", self.moon_distance_scale)?;
        if self.moon_distance_scale <= 0.0 {
            return Err(EclipseError::InvalidMoonDistanceScale(
                self.moon_distance_scale,
            ));
        }

        if self.sample_grid_size == 0 {
            return Err(EclipseError::ZeroSampleGrid);
        }
        if self.sample_grid_size > MAX_SAMPLE_GRID {
            return Err(EclipseError::SampleGridTooLarge {
                size: self.sample_grid_size,
                max: MAX_SAMPLE_GRID,
            });
        }

        ensure_finite("time progress", self.time_progress)?;
        if !(0.0..=1.0).contains(&self.time_progress) {
            return Err(EclipseError::TimeProgressOutOfRange(self.time_progress));
        }
        Ok(())
    }
}

/// Tunables of the optical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpticsConfig {
    /// Linear limb-darkening coefficient `u` in [0, 1].
    pub limb_darkening_coefficient: f64,
    /// Light transmitted through the penumbra, in [0, 1].
    pub penumbra_brightness: f64,
    /// Multiplier on the penumbra radius, >= 1.
    pub penumbra_safety_factor: f64,
    /// Primary disk radius as a fraction of the smaller canvas dimension.
    pub primary_canvas_fraction: f64,
    /// Sweep half-width in units of the contact distance, >= 1.
    pub sweep_margin: f64,
}

impl Default for OpticsConfig {
    fn default() -> Self {
        Self {
            limb_darkening_coefficient: DEFAULT_LIMB_DARKENING,
            penumbra_brightness: PENUMBRA_BRIGHTNESS,
            penumbra_safety_factor: PENUMBRA_SAFETY_FACTOR,
            primary_canvas_fraction: PRIMARY_CANVAS_FRACTION,
            sweep_margin: SWEEP_MARGIN,
        }
    }
}

impl OpticsConfig {
    pub fn validate(&self) -> Result<(), EclipseError> {
        ensure_in_range(
            "limb darkening coefficient",
            self.limb_darkening_coefficient,
            0.0,
            1.0,
        )?;
        ensure_in_range("penumbra brightness", self.penumbra_brightness, 0.0, 1.0)?;
        ensure_in_range(
            "penumbra safety factor",
            self.penumbra_safety_factor,
            1.0,
            2.0,
        )?;
        ensure_in_range(
            "primary canvas fraction",
            self.primary_canvas_fraction,
            f64::MIN_POSITIVE,
            0.5,
        )?;
        ensure_in_range("sweep margin", self.sweep_margin, 1.0, 10.0)?;
        Ok(())
    }
}

/// Simulated clock: total event length and the fixed increment per sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub duration: f64,
    pub time_step: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            time_step: DEFAULT_TIME_STEP,
        }
    }
}

impl Timing {
    pub fn validate(&self) -> Result<(), EclipseError> {
        let ok = self.duration.is_finite()
            && self.time_step.is_finite()
            && self.duration > 0.0
            && self.time_step > 0.0;
        if !ok {
            return Err(EclipseError::InvalidTiming {
                duration: self.duration,
                time_step: self.time_step,
            });
        }
        if self.time_step < MIN_TIME_STEP {
            return Err(EclipseError::TimeStepTooFine {
                time_step: self.time_step,
                min: MIN_TIME_STEP,
            });
        }
        if self.sample_count() > MAX_SAMPLES_PER_RUN {
            return Err(EclipseError::TooManySamples {
                duration: self.duration,
                time_step: self.time_step,
                max: MAX_SAMPLES_PER_RUN,
            });
        }
        Ok(())
    }

    /// Simulated time of the `index`-th sample. Times within a billionth of a
    /// step of the end snap to `duration` so accumulated rounding never adds
    /// a sliver sample.
    pub fn time_at(&self, index: u64) -> f64 {
        let t = index as f64 * self.time_step;
        if self.duration - t <= self.time_step * 1e-9 {
            self.duration
        } else {
            t
        }
    }

    /// Number of samples a full sweep produces, including both endpoints.
    /// Saturates at `usize::MAX` for timings that fail `validate`.
    pub fn sample_count(&self) -> usize {
        let steps = (self.duration / self.time_step - 1e-9).ceil();
        // Float-to-int casts saturate; NaN becomes 0.
        (steps as usize).saturating_add(1)
    }
}

/// Everything needed to run one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub constants: PhysicalConstants,
    pub optics: OpticsConfig,
    pub parameters: SimulationParameters,
    pub viewport: Viewport,
    pub timing: Timing,
}

impl SimConfig {
    /// Validate the parts fixed for the lifetime of a run. Parameters are
    /// checked again at every evaluation since the UI mutates them freely.
    pub fn validate(&self) -> Result<(), EclipseError> {
        self.constants.validate()?;
        self.optics.validate()?;
        self.viewport.validate()?;
        self.timing.validate()?;
        self.parameters.validate()
    }
}
