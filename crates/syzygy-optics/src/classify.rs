use syzygy_core::{EclipseKind, GeometrySnapshot};

/// Name the eclipse phase a snapshot shows.
pub fn classify(geometry: &GeometrySnapshot) -> EclipseKind {
    let d = geometry.separation;
    let moon = geometry.moon_radius;

    match geometry.shadow {
        None => {
            let sun = geometry.sun_radius;
            if d >= sun + moon {
                EclipseKind::None
            } else if moon >= sun && d <= moon - sun {
                EclipseKind::Total
            } else if d <= sun - moon {
                EclipseKind::Annular
            } else {
                EclipseKind::Partial
            }
        }
        Some(shadow) => {
            if shadow.umbra > 0.0 && d + moon <= shadow.umbra {
                EclipseKind::Total
            } else if shadow.umbra > 0.0 && d < shadow.umbra + moon {
                EclipseKind::Partial
            } else if d < shadow.penumbra + moon {
                EclipseKind::Penumbral
            } else {
                EclipseKind::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use syzygy_core::{Mode, ShadowRadii};

    fn solar(sun: f64, moon: f64, d: f64) -> GeometrySnapshot {
        GeometrySnapshot {
            mode: Mode::Solar,
            scale: 1.0,
            sun_radius: sun,
            moon_radius: moon,
            moon_offset: DVec2::new(d, 0.0),
            separation: d,
            shadow: None,
        }
    }

    fn lunar(umbra: f64, penumbra: f64, moon: f64, d: f64) -> GeometrySnapshot {
        GeometrySnapshot {
            mode: Mode::Lunar,
            scale: 1.0,
            sun_radius: 0.0,
            moon_radius: moon,
            moon_offset: DVec2::new(d, 0.0),
            separation: d,
            shadow: Some(ShadowRadii { umbra, penumbra }),
        }
    }

    #[test]
    fn test_solar_phases() {
        assert_eq!(classify(&solar(80.0, 50.0, 200.0)), EclipseKind::None);
        assert_eq!(classify(&solar(80.0, 50.0, 130.0)), EclipseKind::None);
        assert_eq!(classify(&solar(80.0, 50.0, 100.0)), EclipseKind::Partial);
        assert_eq!(classify(&solar(80.0, 50.0, 10.0)), EclipseKind::Annular);
        assert_eq!(classify(&solar(80.0, 90.0, 5.0)), EclipseKind::Total);
        assert_eq!(classify(&solar(80.0, 90.0, 20.0)), EclipseKind::Partial);
    }

    #[test]
    fn test_equal_disks_centred_is_total() {
        assert_eq!(classify(&solar(80.0, 80.0, 0.0)), EclipseKind::Total);
    }

    #[test]
    fn test_lunar_phases() {
        assert_eq!(classify(&lunar(100.0, 180.0, 30.0, 0.0)), EclipseKind::Total);
        assert_eq!(classify(&lunar(100.0, 180.0, 30.0, 90.0)), EclipseKind::Partial);
        assert_eq!(classify(&lunar(100.0, 180.0, 30.0, 150.0)), EclipseKind::Penumbral);
        assert_eq!(classify(&lunar(100.0, 180.0, 30.0, 250.0)), EclipseKind::None);
    }

    #[test]
    fn test_lunar_without_umbra_is_at_most_penumbral() {
        assert_eq!(classify(&lunar(0.0, 80.0, 30.0, 0.0)), EclipseKind::Penumbral);
    }
}
