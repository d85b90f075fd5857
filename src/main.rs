/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::io;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::Builder;

/* Custom libraries */
use scan_elevator::config::{self, Config};
use scan_elevator::control::CommandSource;
use scan_elevator::elevator::{ElevatorCore, Stepper};
use scan_elevator::shared::{ElevatorState, StepReport};
use scan_elevator::unwrap_or_exit;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/* Command line */
#[derive(Parser, Debug)]
#[clap(author, version, about = "Single-car elevator simulator with SCAN dispatch")]
struct Args {
    /// Path to the TOML configuration file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Lowest serviceable floor
    #[clap(long, allow_hyphen_values = true)]
    min_floor: Option<i32>,

    /// Highest serviceable floor
    #[clap(long, allow_hyphen_values = true)]
    max_floor: Option<i32>,

    /// Floor the car starts at (defaults to the lowest floor)
    #[clap(long, allow_hyphen_values = true)]
    start_floor: Option<i32>,

    /// Milliseconds between two steps
    #[clap(long)]
    tick_ms: Option<u64>,

    /// Print each state snapshot as a JSON line
    #[clap(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(min_floor) = self.min_floor {
            config.elevator.min_floor = min_floor;
        }
        if let Some(max_floor) = self.max_floor {
            config.elevator.max_floor = max_floor;
        }
        if let Some(start_floor) = self.start_floor {
            config.elevator.initial_floor = Some(start_floor);
        }
        if let Some(tick_ms) = self.tick_ms {
            config.stepper.tick_interval_ms = tick_ms;
        }
    }
}

fn print_state(state: &ElevatorState, json: bool) {
    if json {
        match serde_json::to_string(state) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize state: {}", e),
        }
    } else {
        println!("{}", state);
    }
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let mut config = unwrap_or_exit!(config::load_config(&config_path, args.config.is_none()));
    args.apply(&mut config);
    unwrap_or_exit!(config.validate());
    debug!("Configuration: {:?}", config);

    // Create the shared elevator
    let core = Arc::new(unwrap_or_exit!(ElevatorCore::from_config(&config.elevator)));
    let bounds = core.bounds();
    info!(
        "Elevator ready at floor {} serving floors {}..={}",
        core.state().floor,
        bounds.min_floor,
        bounds.max_floor
    );
    info!("Enter a floor number or 'go <floor>', 'status' to inspect, 'quit' to stop");

    // Initialize channels
    let (state_tx, state_rx) = cbc::unbounded::<StepReport>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the stepper
    let stepper = Stepper::new(&config.stepper, Arc::clone(&core), state_tx, terminate_rx);
    let stepper_thread = unwrap_or_exit!(Builder::new()
        .name("stepper".into())
        .spawn(move || stepper.run()));

    // Start the command source
    let command_source =
        CommandSource::new(Arc::clone(&core), BufReader::new(io::stdin()), terminate_tx);
    let _command_thread = unwrap_or_exit!(Builder::new()
        .name("commands".into())
        .spawn(move || command_source.run()));

    // Print snapshots until the stepper stops
    let mut last_state = core.state();
    print_state(&last_state, args.json);
    for report in state_rx.iter() {
        if report.state != last_state {
            print_state(&report.state, args.json);
            last_state = report.state;
        }
    }

    if stepper_thread.join().is_err() {
        warn!("Stepper thread panicked");
    }
    info!("Simulation stopped");
}
