//! CLI route: run context and the scan command. Dispatches to the scan
//! service, the opt-in remover and presentation.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_report;
use crate::config::{ConfigLoader, TwinfoldConfig};
use crate::dedup::{remove_duplicates, RemovalMode};
use crate::error::ApiError;
use crate::hash::build_provider;
use crate::scan::{ScanReport, ScanService};
use crate::tree::walker::ChildOrder;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What one invocation should do after loading configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub remove: bool,
    /// Skip the interactive confirmation before removal
    pub assume_yes: bool,
    pub format: String,
}

impl ScanRequest {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            remove: cli.remove,
            assume_yes: cli.yes,
            format: cli.format.clone(),
        }
    }
}

/// Runtime context for CLI execution: scan root and resolved configuration.
pub struct RunContext {
    root: PathBuf,
    config: TwinfoldConfig,
}

impl RunContext {
    /// Load configuration for `root` (or from `config_path` when given).
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        Ok(Self { root, config })
    }

    /// Build a context from an already resolved configuration.
    pub fn with_config(root: PathBuf, config: TwinfoldConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &TwinfoldConfig {
        &self.config
    }

    /// Apply scan-related CLI flags over the loaded configuration.
    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(algorithm) = cli.hash {
            self.config.hash.provider = algorithm;
        }
        if cli.sort_children {
            self.config.walk.child_order = ChildOrder::Name;
        }
        if let Some(mode) = cli.removal_mode {
            self.config.removal.mode = mode;
        }
    }

    /// Scan, optionally remove, and render the report.
    pub fn execute(&self, request: &ScanRequest) -> Result<String, ApiError> {
        if request.format != "text" && request.format != "json" {
            return Err(ApiError::OutputError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                request.format
            )));
        }
        let report = self.run_scan(request, confirm_removal)?;
        let color = request.format == "text" && std::io::stdout().is_terminal();
        format_report(&report, &request.format, color)
    }

    /// Scan and, when requested and confirmed, remove flagged folders.
    ///
    /// `confirm` is asked only when there is something to remove and the
    /// request does not already assume consent.
    pub fn run_scan<F>(&self, request: &ScanRequest, confirm: F) -> Result<ScanReport, ApiError>
    where
        F: FnOnce(&ScanReport, RemovalMode) -> Result<bool, ApiError>,
    {
        let provider = build_provider(self.config.hash.provider, &self.config.hash.xxhsum_program);
        let service = ScanService::new(provider.as_ref(), self.config.walk.walker_config());
        let mut report = service.run(&self.root)?;

        if !request.remove || report.duplicates.is_empty() {
            return Ok(report);
        }

        let mode = self.config.removal.mode;
        if !request.assume_yes && !confirm(&report, mode)? {
            warn!("Removal cancelled by user");
            return Ok(report);
        }

        info!(count = report.duplicates.len(), mode = ?mode, "Removing duplicate folders");
        let summary = remove_duplicates(&report.duplicates, mode)?;
        report.removal = Some(summary);
        Ok(report)
    }
}

/// Interactive yes/no prompt before anything is removed.
fn confirm_removal(report: &ScanReport, mode: RemovalMode) -> Result<bool, ApiError> {
    use dialoguer::Confirm;

    let action = match mode {
        RemovalMode::Trash => "Move to trash",
        RemovalMode::Delete => "Permanently delete",
    };
    Confirm::new()
        .with_prompt(format!(
            "{} {} duplicate folders under {}?",
            action,
            report.duplicates.len(),
            report.root.display()
        ))
        .default(false)
        .interact()
        .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))
}
