use std::path::PathBuf;
use std::process;

use kotatsu_report::report;
use kotatsu_scene::{load_scene_from_path, SceneAssembler, SceneConfig};
use kotatsu_sky::TimeOfDay;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut hours: Option<f64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(&args[i]));
            }
            "--hour" => {
                i += 1;
                hours = Some(args[i].parse().expect("invalid --hour value"));
            }
            "--help" | "-h" => {
                eprintln!("Usage: scene-report [OPTIONS]");
                eprintln!("  --config <path>   Scene RON file (default: built-in scene)");
                eprintln!("  --output <path>   Write the report as JSON");
                eprintln!("  --hour <h>        Sample the sky at fractional hour h (default: local time)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => match load_scene_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: {}", e);
                process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };

    let now = hours.map_or_else(TimeOfDay::now_local, TimeOfDay::from_hours);
    let scene = SceneAssembler::assemble(&config);
    let report = report::build_report(&scene, now);

    println!("\n## Scene Report\n");
    println!("{}", report::format_markdown(&report));

    if let Some(ref path) = output_path {
        report::save_report(path, &report).expect("failed to save report");
        log::info!("Saved report to {}", path.display());
    }

    if !scene.is_complete() {
        log::warn!("{} scene element(s) failed", scene.failures().len());
        process::exit(2);
    }
}
