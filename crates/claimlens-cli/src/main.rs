//! claimlens CLI - Command-line interface
//!
//! Usage:
//!   claimlens extract "India's GDP growth rate was 7.5% in 2024"
//!   claimlens metrics

use clap::{Parser, Subcommand};
use claimlens_extractor::ClaimExtractor;

#[derive(Parser)]
#[command(name = "claimlens")]
#[command(about = "Extract structured data from economic claims")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract metric, value, and year from a claim
    Extract {
        /// The claim text to analyze
        text: String,
    },
    /// List all metric categories the pipeline recognizes
    Metrics,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let extractor = ClaimExtractor::new()?;

    match cli.command {
        Commands::Extract { text } => {
            let result = extractor.extract_all(&text)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Metrics => {
            for name in extractor.registry().metric_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
