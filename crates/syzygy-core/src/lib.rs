//! Shared data model for the eclipse optics workspace: physical constants,
//! simulation parameters, per-sample records and the configuration error type.

pub mod constants;
pub mod error;
pub mod math;
pub mod params;
pub mod types;

pub use error::EclipseError;
pub use params::{OpticsConfig, PhysicalConstants, SimConfig, SimulationParameters, Timing};
pub use types::{
    EclipseKind, FluxSample, GeometrySnapshot, Mode, Occlusion, ShadowRadii, Viewport,
};
