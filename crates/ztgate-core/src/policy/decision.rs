use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Allow,
    Block,
    Review,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Allow => "ALLOW",
            Verdict::Block => "BLOCK",
            Verdict::Review => "REVIEW",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub verdict: Verdict,
    pub reason: String,
}

impl Decision {
    pub(crate) fn new(verdict: Verdict, reason: &str) -> Self {
        Self {
            verdict,
            reason: reason.to_string(),
        }
    }
}

/// Caller-asserted identity and device posture for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyContext {
    pub identity: String,
    pub device_posture: String,
}

impl PolicyContext {
    /// Missing or blank values fall back to `"anonymous"` / `"unknown"`.
    pub fn new(identity: Option<&str>, device_posture: Option<&str>) -> Self {
        fn or_default(value: Option<&str>, default: &str) -> String {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }
        Self {
            identity: or_default(identity, super::ANONYMOUS),
            device_posture: or_default(device_posture, "unknown"),
        }
    }
}
