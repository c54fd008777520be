//! Single source of truth for shared constants.
//! Physical values are in kilometres. Canvas values are in canvas units
//! (CSS pixels for the browser front-end).

/// Mean solar radius.
pub const SUN_RADIUS_KM: f64 = 696_000.0;

/// Mean Earth radius.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Mean Moon radius.
pub const MOON_RADIUS_KM: f64 = 1_737.4;

/// Mean Earth–Sun distance (1 AU).
pub const EARTH_SUN_DISTANCE_KM: f64 = 149_600_000.0;

/// Mean Earth–Moon distance.
pub const EARTH_MOON_DISTANCE_KM: f64 = 384_400.0;

/// Linear limb-darkening coefficient `u` for the solar disk.
pub const DEFAULT_LIMB_DARKENING: f64 = 0.6;

/// Fraction of sunlight still reaching the Moon inside the penumbra.
pub const PENUMBRA_BRIGHTNESS: f64 = 0.4;

/// Multiplier applied to the penumbra radius so partial shadow is not clipped.
pub const PENUMBRA_SAFETY_FACTOR: f64 = 1.05;

/// Target radius of the primary disk as a fraction of the smaller canvas dimension.
pub const PRIMARY_CANVAS_FRACTION: f64 = 0.36;

/// Sweep half-width as a multiple of the contact distance (sum of radii).
/// Values above 1.0 make each sweep start and end out of contact.
pub const SWEEP_MARGIN: f64 = 1.1;

/// Largest magnitude accepted for the impact parameter.
pub const MAX_IMPACT_PARAMETER: f64 = 1.0;

/// Default side length of the limb-darkening sample grid.
pub const DEFAULT_SAMPLE_GRID: u32 = 64;

/// Upper bound on the sample grid. 512² samples already exceeds a 16 ms frame
/// budget on low-end hardware.
pub const MAX_SAMPLE_GRID: u32 = 512;

/// Default simulated event duration (arbitrary time units).
pub const DEFAULT_DURATION: f64 = 100.0;

/// Default fixed increment between samples.
pub const DEFAULT_TIME_STEP: f64 = 0.5;

/// Most samples one run may produce.
pub const MAX_SAMPLES_PER_RUN: usize = 1_000_000;

/// Light-curve slots reserved up front; longer runs grow on demand.
pub const PREALLOCATED_SAMPLES: usize = 4096;

/// Default canvas width and height.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 500.0;

/// Flux below `1 - CONTACT_EPSILON` counts as "in contact".
pub const CONTACT_EPSILON: f64 = 1e-9;

/// Decimal places written for every CSV numeric field.
pub const CSV_PRECISION: usize = 6;

/// Finest time step. Ten units of the last CSV decimal, so consecutive
/// times never print the same.
pub const MIN_TIME_STEP: f64 = 1e-5;
