use bank_office_sim::io::reporting;
use bank_office_sim::simulation::driver::OfficeDriver;
use bank_office_sim::SimulationConfig;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bank-office-sim")]
#[command(version)]
#[command(about = "Single-teller bank office queue simulation")]
struct Cli {
    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated seconds the office stays open
    #[arg(short, long, default_value = "120")]
    duration: u32,

    /// Simulated seconds between two turns at the counter
    #[arg(short, long, default_value = "2")]
    turn_interval: u32,

    /// Write the turn history to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every turn and arrival
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    println!("=== Bank Office Simulation ===");

    let config = SimulationConfig {
        turn_interval_secs: cli.turn_interval,
        duration_secs: cli.duration,
        seed: cli.seed,
        record_history: cli.output.is_some(),
        ..Default::default()
    };

    let mut driver = match OfficeDriver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Seed: {}", driver.seed());
    println!("Running for {} simulated seconds...", cli.duration);
    driver.run();

    let sim = driver.simulator();
    println!("\n=== Closing Report ===");
    print!(
        "{}",
        reporting::format_report(&sim.summary(), &sim.queue_snapshot())
    );
    println!("Turns at the counter: {}", sim.turns());

    if let Some(path) = cli.output {
        match reporting::write_turn_log(&path, &sim.history) {
            Ok(()) => println!("Turn log written to {}", path.display()),
            Err(e) => {
                eprintln!("Error writing CSV: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
