use std::time::Instant;

use syzygy_core::constants::PREALLOCATED_SAMPLES;
use syzygy_core::{EclipseKind, FluxSample, Mode, SimConfig};
use syzygy_scenes::ScenePreset;
use syzygy_sim::{RunState, Simulator};

use crate::error::BenchError;

/// Timing data for a single sweep, per sample.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of replaying one scene to completion.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SweepResult {
    pub scene_name: String,
    pub mode: Mode,
    pub grid_size: u32,
    pub sample_count: usize,
    pub min_flux: f64,
    pub time_of_min_flux: f64,
    pub depth: f64,
    pub max_umbra_fraction: f64,
    pub max_penumbra_fraction: f64,
    pub first_contact: Option<f64>,
    pub last_contact: Option<f64>,
    /// Deepest phase reached over the sweep.
    pub deepest_kind: EclipseKind,
    pub timings: TimingSeries,
}

/// A finished sweep: its metrics plus the raw curve for CSV output.
#[derive(Debug, Clone)]
pub struct SweepRun {
    pub result: SweepResult,
    pub samples: Vec<FluxSample>,
}

/// Replays scene presets headlessly through the tick-driven simulator.
pub struct SweepRunner {
    base: SimConfig,
    grid_override: Option<u32>,
}

impl SweepRunner {
    pub fn new(base: SimConfig, grid_override: Option<u32>) -> Self {
        Self {
            base,
            grid_override,
        }
    }

    /// Run one scene from Idle to Finished, timing every tick.
    pub fn run_scene(&self, preset: &ScenePreset) -> Result<SweepRun, BenchError> {
        let mut config = preset.apply_to(&self.base);
        if let Some(grid) = self.grid_override {
            config.parameters.sample_grid_size = grid;
        }
        log::info!(
            "Running scene '{}' ({}, {} samples)...",
            preset.name,
            config.parameters.mode.name(),
            config.timing.sample_count()
        );

        let mut sim = Simulator::new(config)?;
        let mut frame_times =
            Vec::with_capacity(config.timing.sample_count().min(PREALLOCATED_SAMPLES));
        let mut deepest_kind = EclipseKind::None;

        sim.start();
        while sim.state() == RunState::Running {
            let t0 = Instant::now();
            sim.tick()?;
            frame_times.push(t0.elapsed().as_secs_f64() * 1000.0);

            if let Some(eval) = sim.last_evaluation() {
                if eval.kind.severity() > deepest_kind.severity() {
                    deepest_kind = eval.kind;
                }
            }
        }

        let curve = sim.light_curve();
        let summary = curve
            .summary()
            .ok_or_else(|| BenchError::EmptyCurve(preset.name.clone()))?;

        let result = SweepResult {
            scene_name: preset.name.clone(),
            mode: config.parameters.mode,
            grid_size: config.parameters.sample_grid_size,
            sample_count: summary.sample_count,
            min_flux: summary.min_flux,
            time_of_min_flux: summary.time_of_min_flux,
            depth: summary.depth,
            max_umbra_fraction: summary.max_umbra_fraction,
            max_penumbra_fraction: summary.max_penumbra_fraction,
            first_contact: summary.first_contact,
            last_contact: summary.last_contact,
            deepest_kind,
            timings: compute_timings(&frame_times),
        };
        Ok(SweepRun {
            result,
            samples: curve.samples().to_vec(),
        })
    }
}

/// Compute timing statistics from a list of frame times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    let mut sorted: Vec<f64> = times.iter().copied().filter(|t| t.is_finite()).collect();
    sorted.sort_unstable_by(f64::total_cmp);

    let (Some(&min_ms), Some(&max_ms)) = (sorted.first(), sorted.last()) else {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    };

    TimingSeries {
        mean_ms: sorted.iter().sum::<f64>() / sorted.len() as f64,
        median_ms: quantile(&sorted, 0.5),
        p95_ms: nearest_rank(&sorted, 0.95),
        p99_ms: nearest_rank(&sorted, 0.99),
        min_ms,
        max_ms,
    }
}

/// Linear interpolation between the two closest ranks. `sorted` is non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Smallest value with at least `q` of the samples at or below it, so tail
/// percentiles report a frame that actually happened. `sorted` is non-empty.
fn nearest_rank(sorted: &[f64], q: f64) -> f64 {
    let rank = (q * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}
