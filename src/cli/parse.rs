//! CLI parse: clap types for twinfold. No behavior; definitions only.

use crate::dedup::RemovalMode;
use crate::hash::HashAlgorithm;
use clap::Parser;
use std::path::PathBuf;

/// twinfold - find folders whose whole contents duplicate another folder
#[derive(Parser, Debug)]
#[command(name = "twinfold")]
#[command(about = "Find folders whose whole contents duplicate another folder")]
pub struct Cli {
    /// Root of the tree to scan (default: current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Remove the flagged duplicate folders after detection
    #[arg(long)]
    pub remove: bool,

    /// How to remove flagged folders (trash or delete)
    #[arg(long, value_parser = parse_removal_mode, requires = "remove")]
    pub removal_mode: Option<RemovalMode>,

    /// Do not ask for confirmation before removing
    #[arg(long, short = 'y', requires = "remove")]
    pub yes: bool,

    /// Sort children by name before hashing, so fingerprints do not depend
    /// on directory listing order
    #[arg(long)]
    pub sort_children: bool,

    /// Hash provider (xxhsum, xxh64, blake3)
    #[arg(long, value_parser = parse_hash_algorithm)]
    pub hash: Option<HashAlgorithm>,

    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_hash_algorithm(value: &str) -> Result<HashAlgorithm, String> {
    value.parse()
}

fn parse_removal_mode(value: &str) -> Result<RemovalMode, String> {
    value.parse()
}
