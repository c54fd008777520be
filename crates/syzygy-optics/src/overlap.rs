use std::f64::consts::PI;

use syzygy_core::math::{clamp_unit, disk_area};

/// Area of intersection of two circles with radii `r1`, `r2` whose centres
/// are `d` apart.
///
/// Tangency routes to the closed-form branches: `d == r1 + r2` is disjoint
/// and `d == |r1 - r2|` is full containment, so the lens formula only ever
/// sees `0 < |r1 - r2| < d < r1 + r2` and never divides by `d == 0`.
/// A non-positive radius has no area to share.
pub fn circle_overlap_area(r1: f64, r2: f64, d: f64) -> f64 {
    if r1 <= 0.0 || r2 <= 0.0 {
        return 0.0;
    }
    let d = d.abs();

    if d >= r1 + r2 {
        return 0.0;
    }
    let smaller = r1.min(r2);
    if d <= (r1 - r2).abs() {
        return disk_area(smaller);
    }

    let (d2, r1s, r2s) = (d * d, r1 * r1, r2 * r2);
    let alpha = clamp_unit((d2 + r1s - r2s) / (2.0 * d * r1)).acos();
    let beta = clamp_unit((d2 + r2s - r1s) / (2.0 * d * r2)).acos();
    let kite = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);

    let area = r1s * alpha + r2s * beta - 0.5 * kite.max(0.0).sqrt();
    area.clamp(0.0, PI * smaller * smaller)
}

/// Fraction of the `primary` disk covered by an `occluder` at separation `d`.
pub fn covered_fraction(primary: f64, occluder: f64, d: f64) -> f64 {
    if primary <= 0.0 {
        return 0.0;
    }
    (circle_overlap_area(primary, occluder, d) / disk_area(primary)).clamp(0.0, 1.0)
}
