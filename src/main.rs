use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use claim_recon::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR};
use claim_recon::logging;
use claim_recon::{HtmlReportSink, Pipeline, PipelineSummary, SourceOptions};

#[derive(Parser)]
#[command(name = "claim_recon")]
#[command(about = "Groups insurance claims by chart and reports potential duplicate payments")]
#[command(version = "0.1.0")]
struct Cli {
    /// Claim export to read
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Directory the four HTML reports are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Treat the first row as a header instead of a claim
    #[arg(long)]
    has_headers: bool,

    /// Also write the run summary as JSON
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn run(cli: &Cli) -> anyhow::Result<PipelineSummary> {
    let options = SourceOptions {
        has_headers: cli.has_headers,
    };
    let mut sink = HtmlReportSink::new(&cli.output_dir);

    let summary = Pipeline::run(&cli.input, options, &mut sink)
        .with_context(|| format!("reconciliation of {} failed", cli.input.display()))?;

    if let Some(path) = &cli.summary {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json)
            .with_context(|| format!("unable to write summary to {}", path.display()))?;
    }
    Ok(summary)
}

fn print_summary(summary: &PipelineSummary) {
    println!("\n📊 Reconciliation results:");
    println!("   Input rows: {}", summary.input_rows);
    for stage in &summary.stages {
        println!(
            "   {}: {} charts, {} claims, {} duplicates -> {}",
            stage.stage.title(),
            stage.charts,
            stage.claims,
            stage.duplicates,
            stage.report_file
        );
    }
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            error!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}
