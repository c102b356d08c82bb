//! Weighted rule engine over [`UrlFeatures`].
//!
//! Rules are evaluated in table order; every rule that fires adds its weight
//! and its explanation. The total is capped at 1.0.

use crate::features::UrlFeatures;

/// Reason reported when no rule fires.
pub const SAFE_REASON: &str = "Heuristics indicate safe URL";

/// Separator between explanation fragments.
const REASON_SEPARATOR: &str = "; ";

/// One entry in the rule table.
#[derive(Clone, Copy)]
pub struct HeuristicRule {
    /// Stable identifier, used in logs.
    pub name: &'static str,
    pub weight: f64,
    pub explanation: &'static str,
    pub fires: fn(&UrlFeatures) -> bool,
}

/// The rule table, in evaluation (and reason) order.
pub const RULES: &[HeuristicRule] = &[
    HeuristicRule {
        name: "ip_host",
        weight: 0.5,
        explanation: "IP address used in hostname",
        fires: |f| f.has_ip,
    },
    HeuristicRule {
        name: "at_sign",
        weight: 0.4,
        explanation: "Contains '@' symbol (redirect trick)",
        fires: |f| f.contains_at,
    },
    HeuristicRule {
        name: "percent_encoding",
        weight: 0.3,
        explanation: "Encoded characters (%) in URL",
        fires: |f| f.contains_percent,
    },
    HeuristicRule {
        name: "suspicious_tld",
        weight: 0.3,
        explanation: "Suspicious TLD",
        fires: |f| f.suspicious_tld,
    },
    HeuristicRule {
        name: "long_url",
        weight: 0.2,
        explanation: "Unusually long URL",
        fires: |f| f.length > 200,
    },
    HeuristicRule {
        name: "deep_path",
        weight: 0.2,
        explanation: "Too many subdirectories",
        fires: |f| f.slash_count > 10,
    },
    HeuristicRule {
        name: "high_entropy_host",
        weight: 0.3,
        explanation: "High domain entropy (random hostname)",
        fires: |f| f.hostname_entropy > 4.2,
    },
];

/// Result of running the rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicScore {
    /// Accumulated weight, in [0, 1].
    pub score: f64,
    /// Explanations of the fired rules joined by `"; "`, or [`SAFE_REASON`].
    pub reason: String,
    /// Names of the fired rules, in table order.
    pub fired: Vec<&'static str>,
}

/// Score `features` against [`RULES`].
pub fn score(features: &UrlFeatures) -> HeuristicScore {
    let mut total = 0.0;
    let mut reasons = Vec::new();
    let mut fired = Vec::new();

    for rule in RULES.iter().filter(|r| (r.fires)(features)) {
        total += rule.weight;
        reasons.push(rule.explanation);
        fired.push(rule.name);
    }

    let reason = if reasons.is_empty() {
        SAFE_REASON.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    };

    HeuristicScore {
        score: total.min(1.0),
        reason,
        fired,
    }
}
