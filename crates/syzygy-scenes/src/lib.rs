//! Scene presets and configuration loaded from RON.

pub mod defaults;
pub mod loader;
pub mod preset;
pub mod validator;

pub use loader::LoadError;
pub use preset::ScenePreset;
pub use validator::ValidationError;
