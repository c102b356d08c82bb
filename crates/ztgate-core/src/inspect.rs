//! The inspection pipeline: URL → features → heuristics → aggregation → policy.
//!
//! An [`Inspector`] is built once from validated configuration and an optional
//! scoring capability, then shared (it is `Send + Sync` and cheap to clone).
//! Each call is independent and performs no I/O.

use crate::config::{ConfigError, GateConfig, ThresholdConfig};
use crate::features::{self, UrlFeatures};
use crate::policy::{Decision, PolicyContext, PolicyEngine, PolicyThresholds};
use crate::scoring::{heuristic_score, ModelAvailability, RiskAggregator, RiskAssessment};
use serde::Serialize;

/// A URL plus the caller's (possibly absent) identity and device posture.
#[derive(Debug, Clone, Default)]
pub struct InspectionRequest {
    pub url: String,
    pub identity: Option<String>,
    pub device_posture: Option<String>,
}

impl InspectionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn device_posture(mut self, posture: impl Into<String>) -> Self {
        self.device_posture = Some(posture.into());
        self
    }
}

/// Everything produced for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionOutcome {
    pub url: String,
    /// Identity after defaulting (`"anonymous"` when absent).
    pub identity: String,
    pub assessment: RiskAssessment,
    pub decision: Decision,
}

#[derive(Debug, Clone)]
pub struct Inspector {
    aggregator: RiskAggregator,
    policy: PolicyEngine,
    model: ModelAvailability,
}

impl Inspector {
    /// Build from thresholds, rejecting invalid ones.
    pub fn new(thresholds: &ThresholdConfig, model: ModelAvailability) -> Result<Self, ConfigError> {
        thresholds.validate()?;
        Ok(Self {
            aggregator: RiskAggregator::new(thresholds.heuristic_confidence),
            policy: PolicyEngine::new(PolicyThresholds::from(thresholds)),
            model,
        })
    }

    /// Build from a full config, loading the configured model if any.
    pub fn from_config(cfg: &GateConfig) -> Result<Self, ConfigError> {
        let model = ModelAvailability::load(cfg.model_path.as_deref());
        Self::new(&cfg.thresholds, model)
    }

    /// Default thresholds, heuristics only.
    pub fn heuristic_only() -> Self {
        Self {
            aggregator: RiskAggregator::default(),
            policy: PolicyEngine::default(),
            model: ModelAvailability::Unavailable {
                reason: "no model configured".to_string(),
            },
        }
    }

    pub fn model(&self) -> &ModelAvailability {
        &self.model
    }

    pub fn policy(&self) -> &PolicyEngine {
        &self.policy
    }

    /// Risk assessment for `url` alone.
    pub fn inspect(&self, url: &str) -> RiskAssessment {
        self.assess(&features::extract(url))
    }

    /// Risk assessment for already extracted features.
    pub fn assess(&self, features: &UrlFeatures) -> RiskAssessment {
        let heuristic = heuristic_score(features);
        let assessment =
            self.aggregator
                .aggregate(features, &heuristic, self.model.capability());
        tracing::debug!(
            score = assessment.score,
            mode = ?assessment.mode,
            fired = ?heuristic.fired,
            "assessed url"
        );
        assessment
    }

    /// Assess the URL and apply the zero-trust policy.
    pub fn evaluate(&self, request: &InspectionRequest) -> InspectionOutcome {
        let ctx = PolicyContext::new(
            request.identity.as_deref(),
            request.device_posture.as_deref(),
        );
        let assessment = self.inspect(&request.url);
        let decision = self
            .policy
            .enforce(&ctx.identity, &ctx.device_posture, assessment.score);
        tracing::debug!(
            user = %ctx.identity,
            verdict = %decision.verdict,
            "policy decision"
        );
        InspectionOutcome {
            url: request.url.clone(),
            identity: ctx.identity,
            assessment,
            decision,
        }
    }
}
