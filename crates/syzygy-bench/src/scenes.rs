use std::time::Instant;

use glam::DVec2;
use syzygy_core::{EclipseError, Mode, SimConfig, SimulationParameters};
use syzygy_optics::{evaluate, limb_darkened_flux};

/// Grid sizes run by the limb-darkening ladder, coarsest first.
pub const LADDER_GRIDS: [u32; 6] = [8, 16, 32, 64, 128, 256];

/// Flux from one grid size compared with the finest grid.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LadderRung {
    pub grid_size: u32,
    pub flux: f64,
    pub abs_error: f64,
    pub elapsed_ms: f64,
}

/// Solar disk geometry the ladder integrates over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderGeometry {
    pub offset: DVec2,
    pub sun_radius: f64,
    pub moon_radius: f64,
}

/// Solar geometry of `config` at `progress`, whatever mode it was set to.
pub fn ladder_geometry(
    config: &SimConfig,
    progress: f64,
) -> Result<LadderGeometry, EclipseError> {
    let params = SimulationParameters {
        mode: Mode::Solar,
        limb_darkening_enabled: false,
        time_progress: progress,
        ..config.parameters
    };
    let eval = evaluate(&config.constants, &config.optics, &params, &config.viewport)?;
    Ok(LadderGeometry {
        offset: eval.geometry.moon_offset,
        sun_radius: eval.geometry.sun_radius,
        moon_radius: eval.geometry.moon_radius,
    })
}

/// Integrate the same geometry at each grid size in `grids` and report the
/// error against the last (finest) one.
pub fn resolution_ladder(
    geometry: &LadderGeometry,
    coefficient: f64,
    grids: &[u32],
) -> Vec<LadderRung> {
    let mut rungs: Vec<LadderRung> = grids
        .iter()
        .map(|&grid_size| {
            let t0 = Instant::now();
            let flux = limb_darkened_flux(
                geometry.offset,
                geometry.sun_radius,
                geometry.moon_radius,
                grid_size,
                coefficient,
            );
            LadderRung {
                grid_size,
                flux,
                abs_error: 0.0,
                elapsed_ms: t0.elapsed().as_secs_f64() * 1000.0,
            }
        })
        .collect();

    if let Some(reference) = rungs.last().map(|r| r.flux) {
        for rung in &mut rungs {
            rung.abs_error = (rung.flux - reference).abs();
        }
    }
    rungs
}

/// Format the ladder as a markdown table.
pub fn format_ladder(rungs: &[LadderRung]) -> String {
    let mut out = String::new();
    out.push_str("| Grid | Flux | Abs error | Time (ms) |\n");
    out.push_str("|------|------|-----------|-----------|\n");
    for r in rungs {
        out.push_str(&format!(
            "| {} | {:.6} | {:.2e} | {:.3} |\n",
            r.grid_size, r.flux, r.abs_error, r.elapsed_ms
        ));
    }
    out
}
