//! `ztgate batch` – inspect a list of URLs concurrently.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use ztgate_core::audit::AuditLog;
use ztgate_core::inspect::{InspectionOutcome, Inspector};

use super::{audit_outcome, RequestArgs};

/// URLs from a list file: one per line, trimmed, skipping blanks and `#` comments.
pub(crate) fn parse_url_list(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Evaluate every URL on its own task; results come back in input order.
pub(crate) async fn evaluate_all(
    inspector: Arc<Inspector>,
    urls: Vec<String>,
    args: &RequestArgs,
) -> Result<Vec<InspectionOutcome>> {
    let handles: Vec<_> = urls
        .into_iter()
        .map(|url| {
            let inspector = Arc::clone(&inspector);
            let request = args.request(&url);
            tokio::spawn(async move { inspector.evaluate(&request) })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for h in handles {
        outcomes.push(h.await.context("inspection task panicked")?);
    }
    Ok(outcomes)
}

pub async fn run_batch(
    inspector: Arc<Inspector>,
    audit: Option<&AuditLog>,
    path: &Path,
    args: RequestArgs,
) -> Result<()> {
    let data = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let urls = parse_url_list(&data);
    if urls.is_empty() {
        println!("No URLs in {}.", path.display());
        return Ok(());
    }
    tracing::info!("batch inspecting {} urls from {}", urls.len(), path.display());

    let outcomes = evaluate_all(inspector, urls, &args).await?;

    println!("{:<7} {:<6} {}", "VERDICT", "RISK", "URL");
    for outcome in &outcomes {
        audit_outcome(audit, outcome);
        println!(
            "{:<7} {:<6.2} {}",
            outcome.decision.verdict.as_str(),
            outcome.assessment.score,
            outcome.url
        );
    }
    Ok(())
}
