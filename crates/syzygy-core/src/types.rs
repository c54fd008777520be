use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::error::EclipseError;
use crate::math::ensure_finite;

/// Which body occludes which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Moon passes in front of the Sun.
    #[default]
    Solar,
    /// Moon passes through Earth's shadow.
    Lunar,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Solar => "solar",
            Mode::Lunar => "lunar",
        }
    }

    /// Parse the lowercase name used by the UI layer.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "solar" => Some(Mode::Solar),
            "lunar" => Some(Mode::Lunar),
            _ => None,
        }
    }
}

/// Canvas size in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn validate(&self) -> Result<(), EclipseError> {
        ensure_finite("viewport width", self.width)?;
        ensure_finite("viewport height", self.height)?;
        if self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(EclipseError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Earth's shadow radii at the Moon's distance. Units depend on the caller:
/// kilometres from the cone model, canvas units in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShadowRadii {
    pub umbra: f64,
    pub penumbra: f64,
}

/// Per-sample geometry in canvas units, centred on the primary disk
/// (the Sun in solar mode, Earth's shadow axis in lunar mode).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub mode: Mode,
    /// Canvas units per radian.
    pub scale: f64,
    pub sun_radius: f64,
    pub moon_radius: f64,
    /// Moon centre relative to the primary centre.
    pub moon_offset: DVec2,
    pub separation: f64,
    /// Present in lunar mode only.
    pub shadow: Option<ShadowRadii>,
}

impl GeometrySnapshot {
    /// Radius of the disk the Moon is measured against.
    pub fn primary_radius(&self) -> f64 {
        match self.shadow {
            Some(shadow) => shadow.penumbra,
            None => self.sun_radius,
        }
    }
}

/// Light blocked at one instant, before it is stamped with a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occlusion {
    pub flux: f64,
    pub umbra_fraction: f64,
    pub penumbra_fraction: f64,
}

impl Occlusion {
    /// Solar occlusion: shadow fractions do not apply.
    pub fn solar(flux: f64) -> Self {
        Self {
            flux: flux.clamp(0.0, 1.0),
            umbra_fraction: 0.0,
            penumbra_fraction: 0.0,
        }
    }

    pub fn unobstructed() -> Self {
        Self::solar(1.0)
    }
}

/// One point on the light curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluxSample {
    pub time: f64,
    pub flux: f64,
    pub umbra_fraction: f64,
    pub penumbra_fraction: f64,
}

impl FluxSample {
    pub fn new(time: f64, occlusion: &Occlusion) -> Self {
        Self {
            time,
            flux: occlusion.flux,
            umbra_fraction: occlusion.umbra_fraction,
            penumbra_fraction: occlusion.penumbra_fraction,
        }
    }
}

/// Qualitative eclipse type at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EclipseKind {
    None,
    Partial,
    Annular,
    Total,
    Penumbral,
}

impl EclipseKind {
    pub fn label(self) -> &'static str {
        match self {
            EclipseKind::None => "none",
            EclipseKind::Partial => "partial",
            EclipseKind::Annular => "annular",
            EclipseKind::Total => "total",
            EclipseKind::Penumbral => "penumbral",
        }
    }

    /// Ranking used to report the deepest phase reached over a sweep.
    pub fn severity(self) -> u8 {
        match self {
            EclipseKind::None => 0,
            EclipseKind::Penumbral => 1,
            EclipseKind::Partial => 2,
            EclipseKind::Annular => 3,
            EclipseKind::Total => 4,
        }
    }
}
