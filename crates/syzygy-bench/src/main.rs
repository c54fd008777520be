use std::path::{Path, PathBuf};
use std::process;

use syzygy_bench::report;
use syzygy_bench::runner::{SweepRun, SweepRunner};
use syzygy_bench::scenes;
use syzygy_bench::BenchError;
use syzygy_export::{default_file_name, export_curve};
use syzygy_scenes::defaults::{builtin_config, builtin_scenes};
use syzygy_scenes::loader::load_scenes_from_str;
use syzygy_scenes::validator::validate_scenes;

struct Args {
    scenes_path: Option<PathBuf>,
    csv_dir: Option<PathBuf>,
    grid: Option<u32>,
    baseline_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    regression_threshold: f64,
}

fn usage() {
    eprintln!("Usage: sweep-runner [OPTIONS]");
    eprintln!("  --scenes <path>                Load scene presets from a RON file");
    eprintln!("  --csv-dir <dir>                Write one light-curve CSV per scene");
    eprintln!("  --grid <n>                     Override the limb-darkening grid size");
    eprintln!("  --baseline <path>              Load baseline JSON for comparison");
    eprintln!("  --output <path>                Save current results as JSON baseline");
    eprintln!("  --regression-threshold <pct>   Regression threshold percentage (default: 10)");
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => fail(&format!("missing value for {flag}")),
    }
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        scenes_path: None,
        csv_dir: None,
        grid: None,
        baseline_path: None,
        output_path: None,
        regression_threshold: 10.0,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--scenes" => {
                i += 1;
                parsed.scenes_path = Some(PathBuf::from(value(&args, i, flag)));
            }
            "--csv-dir" => {
                i += 1;
                parsed.csv_dir = Some(PathBuf::from(value(&args, i, flag)));
            }
            "--grid" => {
                i += 1;
                let grid = value(&args, i, flag)
                    .parse()
                    .unwrap_or_else(|_| fail("invalid --grid value"));
                parsed.grid = Some(grid);
            }
            "--baseline" => {
                i += 1;
                parsed.baseline_path = Some(PathBuf::from(value(&args, i, flag)));
            }
            "--output" => {
                i += 1;
                parsed.output_path = Some(PathBuf::from(value(&args, i, flag)));
            }
            "--regression-threshold" => {
                i += 1;
                parsed.regression_threshold = value(&args, i, flag)
                    .parse()
                    .unwrap_or_else(|_| fail("invalid --regression-threshold value"));
            }
            "--help" | "-h" => {
                usage();
                process::exit(0);
            }
            other => {
                usage();
                fail(&format!("Unknown argument: {}", other));
            }
        }
        i += 1;
    }
    parsed
}

fn write_csv_files(dir: &Path, runs: &[SweepRun]) -> Result<(), BenchError> {
    std::fs::create_dir_all(dir)?;
    for run in runs {
        let file = format!(
            "{}_{}",
            run.result.scene_name,
            default_file_name(run.result.mode)
        );
        let path = dir.join(file);
        std::fs::write(&path, export_curve(&run.samples, run.result.mode)?)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn run(args: &Args) -> Result<bool, BenchError> {
    let base = builtin_config()?;
    let presets = match &args.scenes_path {
        Some(path) => load_scenes_from_str(&std::fs::read_to_string(path)?)?,
        None => builtin_scenes()?,
    };
    if let Err(errors) = validate_scenes(&presets, &base) {
        fail(&format!("{} invalid scene(s), see log", errors.len()));
    }

    let runner = SweepRunner::new(base, args.grid);
    let runs = presets
        .iter()
        .map(|preset| runner.run_scene(preset))
        .collect::<Result<Vec<_>, _>>()?;
    let results: Vec<_> = runs.iter().map(|r| r.result.clone()).collect();

    println!("\n## Sweep Results\n");
    println!("{}", report::format_markdown(&results));

    let geometry = scenes::ladder_geometry(&base, 0.4)?;
    let ladder = scenes::resolution_ladder(
        &geometry,
        base.optics.limb_darkening_coefficient,
        &scenes::LADDER_GRIDS,
    );
    println!("## Limb-Darkening Resolution\n");
    println!("{}", scenes::format_ladder(&ladder));

    if let Some(dir) = &args.csv_dir {
        write_csv_files(dir, &runs)?;
    }

    if let Some(path) = &args.output_path {
        let baseline = report::Baseline {
            timestamp: run_timestamp(),
            results: results.clone(),
        };
        report::save_baseline(path, &baseline)?;
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(path) = &args.baseline_path {
        if let Some(baseline) = report::load_baseline(path)? {
            let regressions = report::compare(&results, &baseline, args.regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, args.regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!("ERROR: {} regressions detected", regressions.len());
                return Ok(false);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }
    Ok(true)
}

/// Seconds since the Unix epoch.
fn run_timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("sweep-{secs}")
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args();
    match run(&args) {
        Ok(true) => log::info!("Sweep complete."),
        Ok(false) => process::exit(1),
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
