//! CLI for the ztgate zero-trust URL gate.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use ztgate_core::audit::AuditLog;
use ztgate_core::config;
use ztgate_core::inspect::Inspector;

use commands::{run_batch, run_features, run_inspect, run_log, RequestArgs};

/// Top-level CLI for the ztgate URL gate.
#[derive(Debug, Parser)]
#[command(name = "ztgate")]
#[command(about = "ztgate: phishing-risk inspection with zero-trust access decisions", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/ztgate/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Inspect one URL and print the access decision.
    Inspect {
        /// URL to inspect.
        url: String,
        /// Requesting user (default: anonymous).
        #[arg(long)]
        user: Option<String>,
        /// Device posture, e.g. trusted, compliant, unverified (default: unknown).
        #[arg(long)]
        device: Option<String>,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
        /// Do not append the decision to the audit log.
        #[arg(long)]
        no_audit: bool,
    },

    /// Inspect every URL listed in a file (one per line) concurrently.
    Batch {
        /// Path to the URL list. Blank lines and lines starting with '#' are skipped.
        path: PathBuf,
        /// Requesting user applied to every URL (default: anonymous).
        #[arg(long)]
        user: Option<String>,
        /// Device posture applied to every URL (default: unknown).
        #[arg(long)]
        device: Option<String>,
        /// Do not append decisions to the audit log.
        #[arg(long)]
        no_audit: bool,
    },

    /// Show the features extracted from a URL.
    Features {
        /// URL to analyse.
        url: String,
    },

    /// Show recent audited decisions, newest first.
    Log {
        /// Maximum number of records to show.
        #[arg(long, default_value = "20", value_name = "N")]
        limit: usize,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let audit = AuditLog::new(cfg.audit_log_path()?);

        match cli.command {
            CliCommand::Features { url } => run_features(&url)?,
            CliCommand::Log { limit } => run_log(&audit, limit)?,
            CliCommand::Inspect {
                url,
                user,
                device,
                json,
                no_audit,
            } => {
                let inspector = Inspector::from_config(&cfg).context("invalid configuration")?;
                let audit = (!no_audit).then_some(&audit);
                run_inspect(&inspector, audit, &url, RequestArgs { user, device }, json)?;
            }
            CliCommand::Batch {
                path,
                user,
                device,
                no_audit,
            } => {
                let inspector =
                    Arc::new(Inspector::from_config(&cfg).context("invalid configuration")?);
                let audit = (!no_audit).then_some(&audit);
                run_batch(inspector, audit, &path, RequestArgs { user, device }).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
