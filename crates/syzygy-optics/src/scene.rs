//! Pure evaluation of one instant of an eclipse.
//!
//! Time progress → geometry → occlusion. No state is kept here; the
//! accumulator in `syzygy-sim` stamps results with a time and stores them.

use glam::DVec2;
use syzygy_core::math::{disk_area, lerp};
use syzygy_core::{
    EclipseError, EclipseKind, GeometrySnapshot, Mode, Occlusion, OpticsConfig,
    PhysicalConstants, ShadowRadii, SimulationParameters, Viewport,
};

use crate::classify::classify;
use crate::geometry::{angular_radius, canvas_scale, project_to_canvas, umbra_penumbra_radii};
use crate::occlusion::DiskModel;
use crate::overlap::circle_overlap_area;

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub geometry: GeometrySnapshot,
    pub occlusion: Occlusion,
    pub kind: EclipseKind,
}

/// Evaluate the model at `params.time_progress`.
///
/// All inputs are validated first; any failure is returned before a single
/// number is produced, so callers never see NaN or infinite results.
pub fn evaluate(
    constants: &PhysicalConstants,
    optics: &OpticsConfig,
    params: &SimulationParameters,
    viewport: &Viewport,
) -> Result<Evaluation, EclipseError> {
    constants.validate()?;
    optics.validate()?;
    params.validate()?;
    viewport.validate()?;

    let (geometry, occlusion) = match params.mode {
        Mode::Solar => evaluate_solar(constants, optics, params, viewport)?,
        Mode::Lunar => evaluate_lunar(constants, optics, params, viewport)?,
    };

    Ok(Evaluation {
        kind: classify(&geometry),
        geometry,
        occlusion,
    })
}

/// Moon centre relative to the primary centre. The Moon crosses left to
/// right over `[-margin·reach, +margin·reach]`, offset vertically by
/// `impact · reach`, where `reach` is the first-contact distance.
pub fn sweep_offset(progress: f64, reach: f64, margin: f64, impact: f64) -> DVec2 {
    let half_width = reach * margin;
    DVec2::new(lerp(-half_width, half_width, progress), impact * reach)
}

fn evaluate_solar(
    constants: &PhysicalConstants,
    optics: &OpticsConfig,
    params: &SimulationParameters,
    viewport: &Viewport,
) -> Result<(GeometrySnapshot, Occlusion), EclipseError> {
    let moon_distance = constants.earth_moon_distance * params.moon_distance_scale;

    let sun_angle = angular_radius(constants.sun_radius, constants.earth_sun_distance)?;
    let moon_angle = angular_radius(constants.moon_radius, moon_distance)?;
    let scale = canvas_scale(sun_angle, viewport, optics.primary_canvas_fraction)?;

    let sun_radius = project_to_canvas(sun_angle, scale);
    let moon_radius = project_to_canvas(moon_angle, scale);

    let offset = sweep_offset(
        params.time_progress,
        sun_radius + moon_radius,
        optics.sweep_margin,
        params.impact_parameter,
    );

    let flux = DiskModel::select(params, optics).visible_fraction(sun_radius, moon_radius, offset);

    let geometry = GeometrySnapshot {
        mode: Mode::Solar,
        scale,
        sun_radius,
        moon_radius,
        moon_offset: offset,
        separation: offset.length(),
        shadow: None,
    };
    Ok((geometry, Occlusion::solar(flux)))
}

fn evaluate_lunar(
    constants: &PhysicalConstants,
    optics: &OpticsConfig,
    params: &SimulationParameters,
    viewport: &Viewport,
) -> Result<(GeometrySnapshot, Occlusion), EclipseError> {
    let moon_distance = constants.earth_moon_distance * params.moon_distance_scale;
    let cone = umbra_penumbra_radii(constants, optics, moon_distance)?;

    // Everything is seen from Earth at the Moon's distance, so the shadow
    // cross-section and the Moon share one angular projection.
    let umbra_angle = angular_radius(cone.umbra, moon_distance)?;
    let penumbra_angle = angular_radius(cone.penumbra, moon_distance)?;
    let moon_angle = angular_radius(constants.moon_radius, moon_distance)?;
    let sun_angle = angular_radius(constants.sun_radius, constants.earth_sun_distance)?;
    let scale = canvas_scale(penumbra_angle, viewport, optics.primary_canvas_fraction)?;

    let umbra = project_to_canvas(umbra_angle, scale);
    let penumbra = project_to_canvas(penumbra_angle, scale);
    let moon_radius = project_to_canvas(moon_angle, scale);

    let offset = sweep_offset(
        params.time_progress,
        penumbra + moon_radius,
        optics.sweep_margin,
        params.impact_parameter,
    );
    let separation = offset.length();

    let umbra_overlap = circle_overlap_area(moon_radius, umbra, separation);
    let penumbra_overlap = circle_overlap_area(moon_radius, penumbra, separation);
    let penumbra_only = (penumbra_overlap - umbra_overlap).max(0.0);

    let moon_area = disk_area(moon_radius);
    let umbra_fraction = (umbra_overlap / moon_area).clamp(0.0, 1.0);
    let penumbra_fraction = (penumbra_only / moon_area).clamp(0.0, 1.0 - umbra_fraction);
    let flux = 1.0 - umbra_fraction - penumbra_fraction * (1.0 - optics.penumbra_brightness);

    let geometry = GeometrySnapshot {
        mode: Mode::Lunar,
        scale,
        sun_radius: project_to_canvas(sun_angle, scale),
        moon_radius,
        moon_offset: offset,
        separation,
        shadow: Some(ShadowRadii { umbra, penumbra }),
    };
    let occlusion = Occlusion {
        flux: flux.clamp(0.0, 1.0),
        umbra_fraction,
        penumbra_fraction,
    };
    Ok((geometry, occlusion))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(params: SimulationParameters) -> Evaluation {
        evaluate(
            &PhysicalConstants::default(),
            &OpticsConfig::default(),
            &params,
            &Viewport::default(),
        )
        .expect("valid configuration")
    }

    fn solar_at(progress: f64) -> SimulationParameters {
        SimulationParameters {
            mode: Mode::Solar,
            time_progress: progress,
            ..Default::default()
        }
    }

    fn lunar_at(progress: f64) -> SimulationParameters {
        SimulationParameters {
            mode: Mode::Lunar,
            time_progress: progress,
            ..Default::default()
        }
    }

    #[test]
    fn test_sweep_offset_endpoints() {
        let start = sweep_offset(0.0, 100.0, 1.1, 0.5);
        let middle = sweep_offset(0.5, 100.0, 1.1, 0.5);
        let end = sweep_offset(1.0, 100.0, 1.1, 0.5);
        assert!((start.x + 110.0).abs() < 1e-9);
        assert!(middle.x.abs() < 1e-9);
        assert!((end.x - 110.0).abs() < 1e-9);
        assert_eq!(start.y, 50.0);
    }

    #[test]
    fn test_solar_sun_fills_target_fraction() {
        let eval = run(solar_at(0.0));
        // 0.36 of the 500-unit short side
        assert!((eval.geometry.sun_radius - 180.0).abs() < 1e-9);
        assert!(eval.geometry.shadow.is_none());
    }

    #[test]
    fn test_solar_sweep_starts_and_ends_clear() {
        for progress in [0.0, 1.0] {
            let eval = run(solar_at(progress));
            assert_eq!(eval.occlusion.flux, 1.0, "progress {progress}");
            assert_eq!(eval.kind, EclipseKind::None);
        }
    }

    #[test]
    fn test_solar_mean_distance_is_annular() {
        let eval = run(solar_at(0.5));
        assert!(eval.geometry.separation < 1e-9);
        assert_eq!(eval.kind, EclipseKind::Annular);
        // 1 - (moon/sun)^2 with mean distances
        assert!((eval.occlusion.flux - 0.0562).abs() < 1e-3, "got {}", eval.occlusion.flux);
        assert_eq!(eval.occlusion.umbra_fraction, 0.0);
        assert_eq!(eval.occlusion.penumbra_fraction, 0.0);
    }

    #[test]
    fn test_solar_close_moon_is_total() {
        let params = SimulationParameters {
            moon_distance_scale: 0.9,
            ..solar_at(0.5)
        };
        let eval = run(params);
        assert_eq!(eval.kind, EclipseKind::Total);
        assert_eq!(eval.occlusion.flux, 0.0);
    }

    #[test]
    fn test_solar_grazing_pass_never_covers() {
        let params = SimulationParameters {
            impact_parameter: 1.0,
            ..solar_at(0.5)
        };
        let eval = run(params);
        assert_eq!(eval.occlusion.flux, 1.0);
    }

    #[test]
    fn test_solar_limb_darkening_changes_depth() {
        let flat = run(solar_at(0.5));
        let limb = run(SimulationParameters {
            limb_darkening_enabled: true,
            sample_grid_size: 128,
            ..solar_at(0.5)
        });
        // An annulus leaves only the dim limb visible
        assert!(limb.occlusion.flux < flat.occlusion.flux);
        assert!(limb.occlusion.flux > 0.0);
    }

    #[test]
    fn test_lunar_central_is_total() {
        let eval = run(lunar_at(0.5));
        let shadow = eval.geometry.shadow.expect("lunar snapshot has shadow");
        assert!(shadow.umbra > eval.geometry.moon_radius);
        assert!(shadow.penumbra > shadow.umbra);
        assert_eq!(eval.kind, EclipseKind::Total);
        assert!((eval.occlusion.umbra_fraction - 1.0).abs() < 1e-12);
        assert!(eval.occlusion.penumbra_fraction.abs() < 1e-12);
        assert!(eval.occlusion.flux.abs() < 1e-12);
    }

    #[test]
    fn test_lunar_penumbra_fills_target_fraction() {
        let eval = run(lunar_at(0.2));
        let shadow = eval.geometry.shadow.expect("lunar snapshot has shadow");
        assert!((shadow.penumbra - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_lunar_beyond_umbra_tip_is_penumbral() {
        let params = SimulationParameters {
            moon_distance_scale: 4.0,
            ..lunar_at(0.5)
        };
        let eval = run(params);
        let shadow = eval.geometry.shadow.expect("lunar snapshot has shadow");
        assert_eq!(shadow.umbra, 0.0);
        assert_eq!(eval.kind, EclipseKind::Penumbral);
        assert_eq!(eval.occlusion.umbra_fraction, 0.0);
        assert!((eval.occlusion.penumbra_fraction - 1.0).abs() < 1e-12);
        assert!((eval.occlusion.flux - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_lunar_fractions_stay_consistent() {
        for step in 0..=40 {
            let eval = run(SimulationParameters {
                impact_parameter: 0.45,
                ..lunar_at(step as f64 / 40.0)
            });
            let occ = eval.occlusion;
            assert!((0.0..=1.0).contains(&occ.flux));
            assert!(occ.umbra_fraction + occ.penumbra_fraction <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn test_invalid_configuration_is_reported() {
        let params = SimulationParameters {
            sample_grid_size: 0,
            ..solar_at(0.5)
        };
        let result = evaluate(
            &PhysicalConstants::default(),
            &OpticsConfig::default(),
            &params,
            &Viewport::default(),
        );
        assert_eq!(result, Err(EclipseError::ZeroSampleGrid));

        let constants = PhysicalConstants {
            sun_radius: 1_000.0,
            ..Default::default()
        };
        let result = evaluate(
            &constants,
            &OpticsConfig::default(),
            &lunar_at(0.5),
            &Viewport::default(),
        );
        assert!(matches!(result, Err(EclipseError::SunNotLargerThanEarth { .. })));
    }
}
