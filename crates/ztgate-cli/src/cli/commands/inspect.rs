//! `ztgate inspect` – assess one URL and apply the access policy.

use anyhow::Result;
use ztgate_core::audit::AuditLog;
use ztgate_core::inspect::{InspectionOutcome, Inspector};
use ztgate_core::scoring::ScoringMode;

use super::{audit_outcome, RequestArgs};

pub fn run_inspect(
    inspector: &Inspector,
    audit: Option<&AuditLog>,
    url: &str,
    args: RequestArgs,
    json: bool,
) -> Result<()> {
    let outcome = inspector.evaluate(&args.request(url));
    audit_outcome(audit, &outcome);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render(&outcome));
    }
    Ok(())
}

pub(crate) fn render(outcome: &InspectionOutcome) -> String {
    let mode = match outcome.assessment.mode {
        ScoringMode::HeuristicOnly => "heuristics",
        ScoringMode::HeuristicPlusModel => "heuristics+model",
    };
    format!(
        "Decision:   {}\n\
         User:       {}\n\
         URL:        {}\n\
         Risk score: {:.2} ({})\n\
         Inspection: {}\n\
         Policy:     {}\n",
        outcome.decision.verdict,
        outcome.identity,
        outcome.url,
        outcome.assessment.score,
        mode,
        outcome.assessment.reason,
        outcome.decision.reason,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ztgate_core::inspect::InspectionRequest;

    #[test]
    fn render_lists_decision_and_reasons() {
        let outcome = Inspector::heuristic_only().evaluate(
            &InspectionRequest::new("http://192.168.1.1/login")
                .identity("alice")
                .device_posture("trusted"),
        );
        let text = render(&outcome);
        assert!(text.starts_with("Decision:   REVIEW\n"), "{text}");
        assert!(text.contains("Risk score: 0.50 (heuristics)"));
        assert!(text.contains("Inspection: IP address used in hostname"));
        assert!(text.contains("Policy:     Medium risk — manual review needed"));
    }

    #[test]
    fn inspect_writes_audit_record() {
        let dir = tempfile::tempdir().unwrap();
        let audit = AuditLog::new(dir.path().join("decisions.log"));
        run_inspect(
            &Inspector::heuristic_only(),
            Some(&audit),
            "https://example.com",
            RequestArgs {
                user: Some("alice".to_string()),
                device: Some("trusted".to_string()),
            },
            false,
        )
        .unwrap();

        let records = audit.read_recent(5).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user, "alice");
        assert_eq!(records[0].decision.as_str(), "ALLOW");
        assert_eq!(records[0].inspection_reason, "Heuristics indicate safe URL");
    }
}
