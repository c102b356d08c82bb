//! CLI command handlers. Each command is in its own file.

mod batch;
mod features;
mod inspect;
mod log;

pub use batch::run_batch;
pub use features::run_features;
pub use inspect::run_inspect;
pub use log::run_log;

use ztgate_core::audit::{AuditLog, AuditRecord};
use ztgate_core::inspect::{InspectionOutcome, InspectionRequest};

/// Identity and posture flags shared by `inspect` and `batch`.
#[derive(Debug, Clone, Default)]
pub struct RequestArgs {
    pub user: Option<String>,
    pub device: Option<String>,
}

impl RequestArgs {
    pub fn request(&self, url: &str) -> InspectionRequest {
        InspectionRequest {
            url: url.to_string(),
            identity: self.user.clone(),
            device_posture: self.device.clone(),
        }
    }
}

/// Append the outcome to the audit log. Failures are reported, not fatal.
pub(crate) fn audit_outcome(audit: Option<&AuditLog>, outcome: &InspectionOutcome) {
    let Some(audit) = audit else {
        return;
    };
    let record = AuditRecord::new(
        &outcome.identity,
        &outcome.url,
        &outcome.assessment,
        &outcome.decision,
    );
    if let Err(e) = audit.append(&record) {
        tracing::warn!("failed to write audit record: {e:#}");
        eprintln!("ztgate: failed to write audit log: {e:#}");
    }
}
