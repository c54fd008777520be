//! Limb-darkened photometry by quadrature over a regular grid.
//!
//! There is no closed form for the brightness hidden by an arbitrary
//! occluder on a limb-darkened disk, so the disk is sampled on an N×N grid
//! and every sample inside the disk is weighted by the linear law.

use glam::DVec2;

/// Linear limb-darkening law: relative brightness at `radial_fraction` of the
/// disk radius (0 = centre, 1 = edge). Zero at and beyond the edge.
pub fn limb_factor(radial_fraction: f64, coefficient: f64) -> f64 {
    let r = radial_fraction.abs();
    if r >= 1.0 {
        return 0.0;
    }
    let mu = (1.0 - r * r).sqrt();
    1.0 - coefficient * (1.0 - mu)
}

/// Fraction of a limb-darkened Sun's luminosity left visible by a circular
/// occluder whose centre sits at `occluder_offset` from the Sun's centre.
///
/// Samples are spaced `2 * sun_radius / grid_size` apart, each at the centre
/// of its cell. Returns 1.0 when no sample lands inside the disk.
pub fn limb_darkened_flux(
    occluder_offset: DVec2,
    sun_radius: f64,
    occluder_radius: f64,
    grid_size: u32,
    coefficient: f64,
) -> f64 {
    if sun_radius <= 0.0 || grid_size == 0 {
        return 1.0;
    }
    if occluder_radius <= 0.0 {
        return 1.0;
    }

    let n = grid_size as usize;
    let spacing = 2.0 * sun_radius / grid_size as f64;
    let occluder_r2 = occluder_radius * occluder_radius;

    let mut total = 0.0;
    let mut visible = 0.0;

    for j in 0..n {
        let y = -sun_radius + (j as f64 + 0.5) * spacing;
        for i in 0..n {
            let x = -sun_radius + (i as f64 + 0.5) * spacing;
            let point = DVec2::new(x, y);

            let radial = point.length() / sun_radius;
            if radial >= 1.0 {
                continue;
            }
            let weight = limb_factor(radial, coefficient);
            total += weight;

            if point.distance_squared(occluder_offset) > occluder_r2 {
                visible += weight;
            }
        }
    }

    if total > 0.0 {
        (visible / total).clamp(0.0, 1.0)
    } else {
        1.0
    }
}
