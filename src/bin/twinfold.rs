//! twinfold CLI Binary
//!
//! Scans a directory tree and reports folders that duplicate another folder.

use clap::Parser;
use std::process;
use tracing::{error, info};
use twinfold::cli::{Cli, RunContext, ScanRequest};
use twinfold::config::TwinfoldConfig;
use twinfold::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let mut context = match RunContext::new(cli.root.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", twinfold::cli::map_error(&e));
            process::exit(1);
        }
    };
    context.apply_cli_overrides(&cli);

    // Logging is configured from the loaded config, so it starts after it
    let logging_config = build_logging_config(&cli, context.config());
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %context.root().display(), "twinfold starting");

    match context.execute(&ScanRequest::from_cli(&cli)) {
        Ok(output) => {
            info!("Scan completed successfully");
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            error!("Scan failed: {}", e);
            eprintln!("{}", twinfold::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args over the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, loaded: &TwinfoldConfig) -> LoggingConfig {
    let mut config = loaded.logging.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
