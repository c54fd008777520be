use crate::error::EclipseError;

/// Clamp a cosine/sine argument into [-1, 1] before `acos`/`asin`.
/// Floating-point drift near tangency can push it just outside.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Area of a disk of radius `r`.
pub fn disk_area(r: f64) -> f64 {
    std::f64::consts::PI * r * r
}

/// Reject NaN and infinities with a named error.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, EclipseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EclipseError::NonFinite(name))
    }
}

/// Require a strictly positive, finite distance.
pub fn ensure_positive_distance(name: &'static str, value: f64) -> Result<f64, EclipseError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(EclipseError::NonPositiveDistance { name, value })
    }
}

/// Require a non-negative, finite radius.
pub fn ensure_radius(name: &'static str, value: f64) -> Result<f64, EclipseError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(EclipseError::NegativeRadius { name, value })
    }
}

/// Require a finite coefficient within `[min, max]`.
pub fn ensure_in_range(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, EclipseError> {
    ensure_finite(name, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(EclipseError::InvalidCoefficient { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(1.0000000002), 1.0);
        assert_eq!(clamp_unit(-1.0000000002), -1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn test_disk_area() {
        assert!((disk_area(50.0) - 7853.981633974483).abs() < 1e-9);
        assert_eq!(disk_area(0.0), 0.0);
    }

    #[test]
    fn test_ensure_positive_distance() {
        assert!(ensure_positive_distance("d", 1.0).is_ok());
        assert_eq!(
            ensure_positive_distance("d", 0.0),
            Err(EclipseError::NonPositiveDistance {
                name: "d",
                value: 0.0
            })
        );
        assert_eq!(
            ensure_positive_distance("d", f64::NAN),
            Err(EclipseError::NonFinite("d"))
        );
        assert_eq!(
            ensure_positive_distance("d", f64::INFINITY),
            Err(EclipseError::NonFinite("d"))
        );
    }

    #[test]
    fn test_ensure_radius_allows_zero() {
        assert!(ensure_radius("r", 0.0).is_ok());
        assert!(ensure_radius("r", -0.1).is_err());
    }

    #[test]
    fn test_ensure_in_range_inclusive() {
        assert!(ensure_in_range("u", 0.0, 0.0, 1.0).is_ok());
        assert!(ensure_in_range("u", 1.0, 0.0, 1.0).is_ok());
        assert!(ensure_in_range("u", 1.01, 0.0, 1.0).is_err());
    }
}
