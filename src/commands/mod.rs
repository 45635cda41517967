pub mod analyze;
pub mod regions;

use crate::Config;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (default when no subcommand is given)
    Serve,
    /// Summarize regions of the built-in dataset and print the JSON result
    Analyze(analyze::AnalyzeArgs),
    /// List the regions present in the built-in dataset
    Regions,
}

pub async fn handle_command(
    command: Commands,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => {
            info!("Starting telemetry analyzer");
            let server = crate::Server::new(config.clone()).await?;
            server.run().await?;
            Ok(())
        }
        Commands::Analyze(args) => analyze::handle_analyze_command(args),
        Commands::Regions => regions::handle_regions_command(),
    }
}
