//! Eclipse optics: angular geometry, circle overlap, limb darkening and the
//! pure per-instant evaluation built on them.

pub mod classify;
pub mod geometry;
pub mod limb;
pub mod occlusion;
pub mod overlap;
pub mod scene;

pub use classify::classify;
pub use geometry::{
    angular_radius, canvas_scale, project_to_canvas, umbra_penumbra_radii, umbra_tip_distance,
};
pub use limb::{limb_darkened_flux, limb_factor};
pub use occlusion::DiskModel;
pub use overlap::{circle_overlap_area, covered_fraction};
pub use scene::{evaluate, sweep_offset, Evaluation};
