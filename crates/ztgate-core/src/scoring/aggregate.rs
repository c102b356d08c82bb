//! Blend the heuristic score with an optional classifier.

use super::heuristic::HeuristicScore;
use super::model::ScoringCapability;
use crate::features::UrlFeatures;
use serde::Serialize;

/// How the final score was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    HeuristicOnly,
    HeuristicPlusModel,
}

/// Final risk estimate for one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Always within [0, 1].
    pub score: f64,
    /// Never empty.
    pub reason: String,
    pub mode: ScoringMode,
}

impl RiskAssessment {
    fn heuristic_only(h: &HeuristicScore) -> Self {
        Self {
            score: h.score.clamp(0.0, 1.0),
            reason: h.reason.clone(),
            mode: ScoringMode::HeuristicOnly,
        }
    }
}

/// Decides whether the classifier is consulted and how its output is combined.
#[derive(Debug, Clone, Copy)]
pub struct RiskAggregator {
    /// Heuristic scores at or above this are final; the model is not called.
    pub heuristic_confidence: f64,
}

impl Default for RiskAggregator {
    fn default() -> Self {
        Self {
            heuristic_confidence: 0.7,
        }
    }
}

impl RiskAggregator {
    pub fn new(heuristic_confidence: f64) -> Self {
        Self {
            heuristic_confidence,
        }
    }

    /// Combine `heuristic` with the capability's probability, if one is
    /// available and the rules are not already confident.
    ///
    /// The combined score is `max(probability, heuristic)`. A failing
    /// capability degrades to the heuristic result.
    pub fn aggregate(
        &self,
        features: &UrlFeatures,
        heuristic: &HeuristicScore,
        capability: Option<&dyn ScoringCapability>,
    ) -> RiskAssessment {
        let capability = match capability {
            Some(c) if heuristic.score < self.heuristic_confidence => c,
            _ => return RiskAssessment::heuristic_only(heuristic),
        };

        let probability = match capability.predict(&features.to_vector()) {
            Ok(p) if p.is_finite() => p.clamp(0.0, 1.0),
            Ok(p) => {
                tracing::warn!("scoring model returned {p}; using heuristics only");
                return RiskAssessment::heuristic_only(heuristic);
            }
            Err(e) => {
                tracing::warn!("scoring model failed: {e}; using heuristics only");
                return RiskAssessment::heuristic_only(heuristic);
            }
        };

        RiskAssessment {
            score: probability.max(heuristic.score).clamp(0.0, 1.0),
            reason: format!(
                "ML+Heuristic score (ML={:.2}, heuristics={:.2})",
                probability, heuristic.score
            ),
            mode: ScoringMode::HeuristicPlusModel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{extract, FeatureVector};
    use crate::scoring::heuristic;
    use crate::scoring::ModelError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed probability and counts calls.
    struct Fixed {
        p: f64,
        calls: AtomicUsize,
    }

    impl Fixed {
        fn new(p: f64) -> Self {
            Self {
                p,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ScoringCapability for Fixed {
        fn predict(&self, _: &FeatureVector) -> Result<f64, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.p)
        }
    }

    struct Broken;

    impl ScoringCapability for Broken {
        fn predict(&self, _: &FeatureVector) -> Result<f64, ModelError> {
            Err(ModelError::Predict("boom".to_string()))
        }
    }

    fn h(score: f64, reason: &str) -> HeuristicScore {
        HeuristicScore {
            score,
            reason: reason.to_string(),
            fired: Vec::new(),
        }
    }

    #[test]
    fn no_capability_returns_heuristic() {
        let f = extract("http://192.168.1.1/login");
        let hs = heuristic::score(&f);
        let r = RiskAggregator::default().aggregate(&f, &hs, None);
        assert_eq!(r.score, hs.score);
        assert_eq!(r.reason, hs.reason);
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
    }

    #[test]
    fn confident_heuristic_short_circuits() {
        let f = extract("https://example.com");
        let model = Fixed::new(0.1);
        let r = RiskAggregator::default().aggregate(&f, &h(0.9, "rules"), Some(&model));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
        assert_eq!(r.score, 0.9);
        assert_eq!(r.reason, "rules");
    }

    #[test]
    fn cutoff_is_inclusive() {
        let f = extract("https://example.com");
        let model = Fixed::new(0.99);
        let r = RiskAggregator::default().aggregate(&f, &h(0.7, "rules"), Some(&model));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
    }

    #[test]
    fn model_can_raise_risk() {
        let f = extract("https://example.com");
        let model = Fixed::new(0.62);
        let r = RiskAggregator::default().aggregate(&f, &h(0.4, "rules"), Some(&model));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
        assert_eq!(r.mode, ScoringMode::HeuristicPlusModel);
        assert_eq!(r.score, 0.62);
        assert_eq!(r.reason, "ML+Heuristic score (ML=0.62, heuristics=0.40)");
    }

    #[test]
    fn model_cannot_lower_risk() {
        let f = extract("https://example.com");
        let model = Fixed::new(0.05);
        let r = RiskAggregator::default().aggregate(&f, &h(0.5, "rules"), Some(&model));
        assert_eq!(r.score, 0.5);
        assert_eq!(r.mode, ScoringMode::HeuristicPlusModel);
        assert_eq!(r.reason, "ML+Heuristic score (ML=0.05, heuristics=0.50)");
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let f = extract("https://example.com");
        let model = Fixed::new(1.7);
        let r = RiskAggregator::default().aggregate(&f, &h(0.0, "rules"), Some(&model));
        assert_eq!(r.score, 1.0);
    }

    #[test]
    fn nan_probability_falls_back() {
        let f = extract("https://example.com");
        let model = Fixed::new(f64::NAN);
        let r = RiskAggregator::default().aggregate(&f, &h(0.3, "rules"), Some(&model));
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
        assert_eq!(r.score, 0.3);
    }

    #[test]
    fn failing_capability_falls_back() {
        let f = extract("https://example.com");
        let r = RiskAggregator::default().aggregate(&f, &h(0.3, "rules"), Some(&Broken));
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
        assert_eq!(r.score, 0.3);
        assert_eq!(r.reason, "rules");
    }

    #[test]
    fn custom_cutoff() {
        let f = extract("https://example.com");
        let model = Fixed::new(0.9);
        let r = RiskAggregator::new(0.3).aggregate(&f, &h(0.3, "rules"), Some(&model));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
        assert_eq!(r.mode, ScoringMode::HeuristicOnly);
    }
}
