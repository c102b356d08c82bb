use super::decision::{Decision, Verdict};
use super::posture::DevicePosture;
use crate::config::ThresholdConfig;

/// Identity value that marks an unauthenticated caller.
pub const ANONYMOUS: &str = "anonymous";

/// Cut-offs used by [`PolicyEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyThresholds {
    /// Scores at or above this (and below `high_risk`) go to review.
    pub allow_threshold: f64,
    /// Scores at or above this are blocked outright.
    pub high_risk: f64,
    /// Untrusted devices are blocked above this score.
    pub device_risk: f64,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self::from(&ThresholdConfig::default())
    }
}

impl From<&ThresholdConfig> for PolicyThresholds {
    fn from(cfg: &ThresholdConfig) -> Self {
        Self {
            allow_threshold: cfg.allow_threshold,
            high_risk: cfg.high_risk,
            device_risk: cfg.device_risk,
        }
    }
}

/// Ordered zero-trust decision rules. The first rule that matches wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEngine {
    thresholds: PolicyThresholds,
}

impl PolicyEngine {
    pub fn new(thresholds: PolicyThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &PolicyThresholds {
        &self.thresholds
    }

    pub fn enforce(&self, identity: &str, device_posture: &str, risk_score: f64) -> Decision {
        let t = &self.thresholds;

        // 1. Identity.
        let identity = identity.trim();
        if identity.is_empty() || identity.eq_ignore_ascii_case(ANONYMOUS) {
            return Decision::new(
                Verdict::Block,
                "Unauthenticated user — identity verification required",
            );
        }

        // 2. Device posture.
        if !DevicePosture::classify(device_posture).is_trusted() {
            return if risk_score > t.device_risk {
                Decision::new(Verdict::Block, "Unverified device and elevated risk")
            } else {
                Decision::new(Verdict::Review, "Device not compliant; review required")
            };
        }

        // 3. Risk, for trusted and compliant devices alike.
        if risk_score >= t.high_risk {
            Decision::new(Verdict::Block, "High phishing probability detected")
        } else if risk_score >= t.allow_threshold {
            Decision::new(Verdict::Review, "Medium risk — manual review needed")
        } else {
            Decision::new(Verdict::Allow, "Risk low — access permitted")
        }
    }
}
