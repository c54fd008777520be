use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::BenchError;
use crate::runner::SweepResult;

/// Allowed drift of a replayed minimum flux before it counts as a change in
/// the model rather than JSON round-off.
pub const FLUX_DRIFT_TOLERANCE: f64 = 1e-9;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<SweepResult>,
}

/// One way a run got worse than its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Regression {
    /// Mean per-sample time rose by `pct_change` percent.
    Slower { scene_name: String, pct_change: f64 },
    /// The replay no longer produces the same minimum flux.
    FluxDrift {
        scene_name: String,
        baseline: f64,
        current: f64,
    },
}

/// Read a stored baseline. A missing file is `Ok(None)`, so the first run
/// of a new checkout can record one. A file that exists but does not parse is
/// an error rather than silently skipping the comparison.
pub fn load_baseline(path: &Path) -> Result<Option<Baseline>, BenchError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let baseline: Baseline =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| BenchError::Baseline {
            path: path.display().to_string(),
            source,
        })?;
    log::debug!(
        "Baseline {} from {} has {} scenes",
        path.display(),
        baseline.timestamp,
        baseline.results.len()
    );
    Ok(Some(baseline))
}

/// Write a baseline as pretty JSON, creating parent directories.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> Result<(), BenchError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, baseline).map_err(|source| {
        BenchError::Baseline {
            path: path.display().to_string(),
            source,
        }
    })?;
    writer.flush()?;
    Ok(())
}

/// Compare current results against a baseline. Scenes missing from the
/// baseline are skipped.
pub fn compare(
    current: &[SweepResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<Regression> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };

        if base.timings.mean_ms > 0.0 {
            let pct_change =
                (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
            if pct_change > threshold_pct {
                regressions.push(Regression::Slower {
                    scene_name: result.scene_name.clone(),
                    pct_change,
                });
            }
        }

        if (result.min_flux - base.min_flux).abs() > FLUX_DRIFT_TOLERANCE {
            regressions.push(Regression::FluxDrift {
                scene_name: result.scene_name.clone(),
                baseline: base.min_flux,
                current: result.min_flux,
            });
        }
    }

    regressions
}

fn fmt_time(t: Option<f64>) -> String {
    t.map_or_else(|| "-".to_string(), |t| format!("{t:.2}"))
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[SweepResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Mode | Kind | Samples | Min flux | t(min) | Contacts | Mean (ms) | P95 (ms) | Max (ms) |\n");
    out.push_str("|-------|------|------|---------|----------|--------|----------|-----------|----------|----------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {:.6} | {:.2} | {} .. {} | {:.3} | {:.3} | {:.3} |\n",
            r.scene_name,
            r.mode.name(),
            r.deepest_kind.label(),
            r.sample_count,
            r.min_flux,
            r.time_of_min_flux,
            fmt_time(r.first_contact),
            fmt_time(r.last_contact),
            r.timings.mean_ms,
            r.timings.p95_ms,
            r.timings.max_ms,
        ));
    }

    out
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[Regression], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold with identical curves. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold or flux drift):\n",
        threshold_pct
    ));
    for regression in regressions {
        match regression {
            Regression::Slower {
                scene_name,
                pct_change,
            } => out.push_str(&format!("  - {}: +{:.1}%\n", scene_name, pct_change)),
            Regression::FluxDrift {
                scene_name,
                baseline,
                current,
            } => out.push_str(&format!(
                "  - {}: min flux {:.9} -> {:.9}\n",
                scene_name, baseline, current
            )),
        }
    }
    out
}
