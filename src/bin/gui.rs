//! Warehouse robot GUI Entry Point
//!
//! Run with: `cargo run --features gui --bin warehouse-robot-gui`

use warehouse_robot::config::Config;
use warehouse_robot::gui::run_gui;

fn main() -> eframe::Result<()> {
    // Load config or use default
    let (config, source) = load_config();

    // Initialize logging at the configured level unless RUST_LOG overrides it
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();

    match source {
        Ok(path) => log::info!("Loaded config from: {}", path),
        Err(rejected) => {
            for (path, reason) in rejected {
                log::warn!("Ignoring {}: {}", path, reason);
            }
            log::info!("Using default configuration");
        }
    }

    log::info!("Starting warehouse robot GUI");
    log::info!(
        "Arena: {}x{} px, robot {} px at {} px/tick",
        config.arena.width_px,
        config.arena.height_px,
        config.robot.size_px,
        config.robot.speed_px
    );

    run_gui(config)
}

/// Load configuration from the first readable file, or use default.
///
/// Returns the path it came from, or the files that existed but were rejected.
fn load_config() -> (Config, Result<&'static str, Vec<(&'static str, String)>>) {
    let paths = ["config.yaml", "warehouse-robot.yaml", "../config.yaml"];
    let mut rejected = Vec::new();

    for path in paths {
        match Config::from_file(path) {
            Ok(config) => return (config, Ok(path)),
            Err(e) if std::path::Path::new(path).exists() => rejected.push((path, e.to_string())),
            Err(_) => {}
        }
    }

    (Config::default(), Err(rejected))
}
