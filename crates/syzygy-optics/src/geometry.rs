//! Angular geometry: physical radius/distance pairs to angular radii, and
//! angular radii to canvas lengths.

use syzygy_core::math::{ensure_positive_distance, ensure_radius};
use syzygy_core::{EclipseError, OpticsConfig, PhysicalConstants, ShadowRadii, Viewport};

/// Angular radius (radians) of a body of `physical_radius` seen from `distance`.
pub fn angular_radius(physical_radius: f64, distance: f64) -> Result<f64, EclipseError> {
    ensure_radius("physical radius", physical_radius)?;
    ensure_positive_distance("distance", distance)?;
    Ok(physical_radius.atan2(distance))
}

/// Canvas length of an angle under a projection `scale` (canvas units per radian).
pub fn project_to_canvas(angle: f64, scale: f64) -> f64 {
    angle * scale
}

/// Projection scale that makes a disk of `primary_angle` fill `fraction`
/// of the viewport's smaller dimension.
pub fn canvas_scale(
    primary_angle: f64,
    viewport: &Viewport,
    fraction: f64,
) -> Result<f64, EclipseError> {
    viewport.validate()?;
    ensure_positive_distance("primary angular radius", primary_angle)?;
    Ok(viewport.min_dimension() * fraction / primary_angle)
}

/// Distance behind Earth's centre at which the umbra cone closes.
pub fn umbra_tip_distance(constants: &PhysicalConstants) -> Result<f64, EclipseError> {
    ensure_positive_distance("earth radius", constants.earth_radius)?;
    ensure_positive_distance("earth-sun distance", constants.earth_sun_distance)?;
    if constants.sun_radius <= constants.earth_radius {
        return Err(EclipseError::SunNotLargerThanEarth {
            sun: constants.sun_radius,
            earth: constants.earth_radius,
        });
    }
    Ok(constants.earth_radius * constants.earth_sun_distance
        / (constants.sun_radius - constants.earth_radius))
}

/// Umbra and penumbra radii (physical units) at `moon_distance` behind Earth.
///
/// The umbra shrinks linearly to zero at the cone tip and stays zero beyond
/// it. The penumbra extends the umbra by the Sun's angular radius over the
/// same distance, widened by the safety factor.
pub fn umbra_penumbra_radii(
    constants: &PhysicalConstants,
    optics: &OpticsConfig,
    moon_distance: f64,
) -> Result<ShadowRadii, EclipseError> {
    ensure_positive_distance("moon distance", moon_distance)?;
    let tip = umbra_tip_distance(constants)?;
    let umbra = (constants.earth_radius * (1.0 - moon_distance / tip)).max(0.0);

    let sun_angle = angular_radius(constants.sun_radius, constants.earth_sun_distance)?;
    let penumbra = (umbra + sun_angle.tan() * moon_distance) * optics.penumbra_safety_factor;

    Ok(ShadowRadii { umbra, penumbra })
}
