mod resolve;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "days")]
#[command(about = "Resolve place names to coordinates and back")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a place name to a location.
    Forward {
        /// Place name, English or localized.
        query: String,
    },
    /// Resolve coordinates to a city-level address.
    Reverse {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Print the loaded synonym dictionary.
    Synonyms,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = days_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let dictionary = resolve::load_dictionary(&config)?;

    match cli.command {
        Commands::Forward { query } => resolve::run_forward(&config, dictionary, &query).await,
        Commands::Reverse { lat, lng } => resolve::run_reverse(&config, dictionary, lat, lng).await,
        Commands::Synonyms => resolve::print_synonyms(&dictionary),
    }
}
