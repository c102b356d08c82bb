//! `ztgate log` – show recent audited decisions.

use anyhow::Result;
use ztgate_core::audit::AuditLog;

pub fn run_log(audit: &AuditLog, limit: usize) -> Result<()> {
    let records = audit.read_recent(limit)?;
    if records.is_empty() {
        println!("No decisions in {}.", audit.path().display());
        return Ok(());
    }
    println!(
        "{:<19} {:<12} {:<7} {:<5} {}",
        "TIME", "USER", "VERDICT", "RISK", "URL"
    );
    for r in records {
        println!(
            "{:<19} {:<12} {:<7} {:<5.2} {}",
            r.timestamp,
            r.user,
            r.decision.as_str(),
            r.risk_score,
            r.url
        );
        println!("    inspection: {}", r.inspection_reason);
        println!("    policy:     {}", r.policy_reason);
    }
    Ok(())
}
