use clap::Parser;
use telemetry_analyzer::commands::{Commands, handle_command};
use telemetry_analyzer::Config;
use tracing::error;

#[derive(Parser)]
#[command(name = "telemetry-analyzer")]
#[command(about = "Per-region telemetry analysis service")]
struct Cli {
    #[arg(short, long, help = "Path to configuration file")]
    config: Option<String>,

    #[arg(short, long, help = "Override the listen port")]
    port: Option<u16>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.level))
        .init();

    let command = cli.command.unwrap_or(Commands::Serve);
    if let Err(e) = handle_command(command, &config).await {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
