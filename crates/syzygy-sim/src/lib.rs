pub mod clock;
pub mod light_curve;
pub mod simulator;
pub mod state_machine;

pub use light_curve::{CurveSummary, LightCurve};
pub use simulator::Simulator;
pub use state_machine::{Command, RunState};
