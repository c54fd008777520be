use glam::DVec2;
use syzygy_core::{OpticsConfig, SimulationParameters};

use crate::limb::limb_darkened_flux;
use crate::overlap::covered_fraction;

/// How the light source's disk is modelled when computing visible flux.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiskModel {
    /// Uniform disk: flux follows the exact overlap area.
    Flat,
    /// Linear limb darkening, integrated on a `grid_size`² grid.
    LimbDarkened { coefficient: f64, grid_size: u32 },
}

impl DiskModel {
    /// Select the model the parameters ask for.
    pub fn select(params: &SimulationParameters, optics: &OpticsConfig) -> Self {
        if params.limb_darkening_enabled {
            DiskModel::LimbDarkened {
                coefficient: optics.limb_darkening_coefficient,
                grid_size: params.sample_grid_size,
            }
        } else {
            DiskModel::Flat
        }
    }

    /// Fraction of the source's light still visible with an occluder of
    /// `occluder_radius` centred at `offset` from the source centre.
    pub fn visible_fraction(&self, source_radius: f64, occluder_radius: f64, offset: DVec2) -> f64 {
        match *self {
            DiskModel::Flat => {
                1.0 - covered_fraction(source_radius, occluder_radius, offset.length())
            }
            DiskModel::LimbDarkened {
                coefficient,
                grid_size,
            } => limb_darkened_flux(offset, source_radius, occluder_radius, grid_size, coefficient),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_follows_flag() {
        let optics = OpticsConfig::default();
        let mut params = SimulationParameters::default();
        assert_eq!(DiskModel::select(&params, &optics), DiskModel::Flat);

        params.limb_darkening_enabled = true;
        params.sample_grid_size = 32;
        assert_eq!(
            DiskModel::select(&params, &optics),
            DiskModel::LimbDarkened {
                coefficient: optics.limb_darkening_coefficient,
                grid_size: 32
            }
        );
    }

    #[test]
    fn test_flat_total_and_clear() {
        let model = DiskModel::Flat;
        assert_eq!(model.visible_fraction(80.0, 80.0, DVec2::ZERO), 0.0);
        assert_eq!(model.visible_fraction(80.0, 100.0, DVec2::ZERO), 0.0);
        assert_eq!(model.visible_fraction(80.0, 50.0, DVec2::new(130.0, 0.0)), 1.0);
        assert_eq!(model.visible_fraction(80.0, 50.0, DVec2::new(0.0, 200.0)), 1.0);
    }

    #[test]
    fn test_models_agree_at_extremes() {
        let limb = DiskModel::LimbDarkened {
            coefficient: 0.6,
            grid_size: 48,
        };
        for model in [DiskModel::Flat, limb] {
            assert_eq!(model.visible_fraction(80.0, 120.0, DVec2::ZERO), 0.0);
            assert_eq!(model.visible_fraction(80.0, 50.0, DVec2::new(200.0, 0.0)), 1.0);
        }
    }
}
