//! Audit trail of inspection decisions.
//!
//! One JSON object per line, appended to a log file. The engine itself never
//! writes here; callers hand each finished inspection to [`AuditLog::append`].

use crate::policy::{Decision, Verdict};
use crate::scoring::RiskAssessment;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// `timestamp` format: local time, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One audited inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: String,
    pub user: String,
    pub url: String,
    /// Final risk score rounded to two decimals.
    pub risk_score: f64,
    pub decision: Verdict,
    pub inspection_reason: String,
    pub policy_reason: String,
}

impl AuditRecord {
    /// Build a record stamped with the current local time.
    pub fn new(user: &str, url: &str, assessment: &RiskAssessment, decision: &Decision) -> Self {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(timestamp, user, url, assessment, decision)
    }

    pub fn with_timestamp(
        timestamp: String,
        user: &str,
        url: &str,
        assessment: &RiskAssessment,
        decision: &Decision,
    ) -> Self {
        Self {
            timestamp,
            user: user.to_string(),
            url: url.to_string(),
            risk_score: round2(assessment.score),
            decision: decision.verdict,
            inspection_reason: assessment.reason.clone(),
            policy_reason: decision.reason.clone(),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Append-only JSON-lines audit file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file (and its directory) if needed.
    pub fn append(&self, record: &AuditRecord) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        f.write_all(line.as_bytes())
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    /// Up to `limit` most recent records, newest first.
    ///
    /// Streams the file line by line, holding at most `limit` records. A
    /// missing file is an empty log. Lines that do not parse are skipped.
    pub fn read_recent(&self, limit: usize) -> Result<Vec<AuditRecord>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("open {}", self.path.display()));
            }
        };
        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut window: VecDeque<AuditRecord> = VecDeque::with_capacity(limit);
        let mut skipped = 0usize;
        for line in BufReader::new(file).lines() {
            let line = line.with_context(|| format!("read {}", self.path.display()))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => {
                    if window.len() == limit {
                        window.pop_front();
                    }
                    window.push_back(record);
                }
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!("skipped {} malformed audit lines", skipped);
        }
        Ok(window.into_iter().rev().collect())
    }
}
