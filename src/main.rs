//! Warehouse robot - CLI Entry Point
//!
//! Headless runs of the simulation and configuration helpers.
//! The windowed version lives in `warehouse-robot-gui` (`--features gui`).

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use warehouse_robot::clock::{Clock, ManualClock, MonotonicClock};
use warehouse_robot::config::ArrivalPolicy;
use warehouse_robot::runner::{run_loop, FrameLimiter, LoopOutcome, Pacer, SimulatedPacer};
use warehouse_robot::stats::RunReport;
use warehouse_robot::surface::HeadlessSurface;
use warehouse_robot::{Config, Simulation};

#[derive(Parser)]
#[command(name = "warehouse-robot")]
#[command(version)]
#[command(about = "Warehouse robot simulation: straight-line drive to a target on a move/stop duty cycle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation without a window
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Maximum number of frames
        #[arg(short, long, default_value = "100000")]
        frames: u64,

        /// Use the wall clock and cap the loop at the configured frame rate
        #[arg(long)]
        realtime: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Print the effective configuration
    ShowConfig {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            frames,
            realtime,
            json,
        } => {
            let config = load_config(&config)?;
            run_headless(config, frames, realtime, json)
        }

        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }

        Commands::ShowConfig { config } => {
            let config = load_config(&config)?;
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

/// Initialize logging; `RUST_LOG` takes precedence over `default_level`
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Load the config file if it exists, defaults otherwise, then start logging
/// at the configured level
fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let (config, from_file) = if path.exists() {
        (Config::from_file(path)?, true)
    } else {
        (Config::default(), false)
    };

    init_logging(&config.logging.log_level);
    if from_file {
        log::info!("Loaded config from: {:?}", path);
    } else {
        log::info!("Using default configuration");
    }
    Ok(config)
}

fn run_headless(
    mut config: Config,
    frames: u64,
    realtime: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Nobody can close a headless surface, so arrival ends the run
    config.arrival = ArrivalPolicy::Exit;

    let mut surface = HeadlessSurface::new(config.arena.width_px, config.arena.height_px)?;
    let interval = config.render.frame_interval();

    let report = if realtime {
        let mut sim = Simulation::new(config, MonotonicClock::new());
        let mut pacer = FrameLimiter::new(interval);
        drive(&mut sim, &mut surface, &mut pacer, frames)?
    } else {
        let clock = ManualClock::new();
        let mut sim = Simulation::new(config, &clock);
        let mut pacer = SimulatedPacer::new(&clock, interval);
        drive(&mut sim, &mut surface, &mut pacer, frames)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn drive<C: Clock, P: Pacer>(
    sim: &mut Simulation<C>,
    surface: &mut HeadlessSurface,
    pacer: &mut P,
    frames: u64,
) -> Result<RunReport, Box<dyn std::error::Error>> {
    let outcome: LoopOutcome = run_loop(sim, surface, pacer, Some(frames))?;
    Ok(RunReport::from_simulation(sim, &outcome))
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
