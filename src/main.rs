//! keyscout - YouTube API key discovery.
//!
//! CLI entry point.

use clap::Parser;
use keyscout::config::EXPLORER_BASE;
use keyscout::{Config, ConsoleOutput, KeyFinder};
use std::fs;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("keyscout=debug,info")
    } else {
        EnvFilter::new("keyscout=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let console = ConsoleOutput::new(config.verbose, config.json);

    let finder = match KeyFinder::new(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to create finder: {}", e);
            return ExitCode::FAILURE;
        }
    };

    console.print_start(config.base_url.as_deref().unwrap_or(EXPLORER_BASE));

    let result = match finder.discover().await {
        Ok(r) => r,
        Err(e) => {
            error!("Discovery failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    console.print_result(&result);
    console.print_hint(&result.credential);

    if config.json {
        let json = serde_json::to_string_pretty(&result).unwrap_or_default();
        if let Some(ref output_path) = config.output {
            if let Err(e) = fs::write(output_path, &json) {
                error!("Failed to write output file: {}", e);
                return ExitCode::FAILURE;
            }
        } else {
            println!("{}", json);
        }
    } else if let Some(ref output_path) = config.output {
        // Write JSON to file even in non-JSON mode
        let json = serde_json::to_string_pretty(&result).unwrap_or_default();
        if let Err(e) = fs::write(output_path, &json) {
            error!("Failed to write output file: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
