use clap::{Parser, Subcommand};
use tracing::error;

use ldl_etl::config::Config;
use ldl_etl::error::Result;
use ldl_etl::logging;
use ldl_etl::pipeline;

#[derive(Parser)]
#[command(name = "ldl_etl")]
#[command(about = "Life Design Lab student engagement data ETL")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the toml configuration file
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce the department roster file
    RosterFile,
    /// Produce the data-analysis file
    DataFile,
    /// Produce both output files sequentially
    Run,
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::RosterFile => {
            println!("🔄 Running roster file ETL...");
            let path = pipeline::run_roster_file_etl(&config)?;
            println!("✅ Roster file written: {}", path.display());
        }
        Commands::DataFile => {
            println!("🔄 Running data file ETL...");
            let path = pipeline::run_data_file_etl(&config)?;
            println!("✅ Data file written: {}", path.display());
        }
        Commands::Run => {
            println!("🔄 Running full ETL...");
            let roster_path = pipeline::run_roster_file_etl(&config)?;
            println!("✅ Roster file written: {}", roster_path.display());
            let data_path = pipeline::run_data_file_etl(&config)?;
            println!("✅ Data file written: {}", data_path.display());
        }
    }
    Ok(())
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("ETL run failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
