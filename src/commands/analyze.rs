use crate::{
    analysis::{AnalysisRequest, analyze},
    telemetry::Dataset,
};
use clap::Args;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Comma separated region names, e.g. `emea,amer`
    #[arg(long, value_delimiter = ',', required = true)]
    pub regions: Vec<String>,

    /// Latency threshold in milliseconds
    #[arg(long, allow_negative_numbers = true)]
    pub threshold_ms: i64,

    /// Print compact JSON instead of pretty output
    #[arg(long)]
    pub compact: bool,
}

pub fn handle_analyze_command(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_analysis(&Dataset::builtin(), args)?);
    Ok(())
}

fn render_analysis(dataset: &Dataset, args: AnalyzeArgs) -> serde_json::Result<String> {
    let request = AnalysisRequest {
        regions: args.regions,
        threshold_ms: args.threshold_ms,
    };
    let summaries = analyze(dataset, &request);

    if args.compact {
        serde_json::to_string(&summaries)
    } else {
        serde_json::to_string_pretty(&summaries)
    }
}
