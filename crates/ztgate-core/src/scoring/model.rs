//! Optional statistical scoring capability.

use super::ModelError;
use crate::features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// An external probability estimator over a [`FeatureVector`].
///
/// Implementations are shared read-only across concurrent inspections, so the
/// trait exposes no mutation and requires `Send + Sync`.
pub trait ScoringCapability: Send + Sync {
    /// Probability in [0, 1] that the URL is malicious.
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

/// Outcome of trying to construct a scoring capability at startup.
#[derive(Clone)]
pub enum ModelAvailability {
    Available(Arc<dyn ScoringCapability>),
    Unavailable { reason: String },
}

impl ModelAvailability {
    /// Load a [`LogisticModel`] from `path`, or report why none is available.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Unavailable {
                reason: "no model configured".to_string(),
            };
        };
        match LogisticModel::from_path(path) {
            Ok(model) => {
                tracing::info!("loaded scoring model from {}", path.display());
                Self::Available(Arc::new(model))
            }
            Err(e) => {
                tracing::warn!("scoring model unavailable: {e}");
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn capability(&self) -> Option<&dyn ScoringCapability> {
        match self {
            Self::Available(c) => Some(c.as_ref()),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl fmt::Debug for ModelAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Available"),
            Self::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

/// Linear classifier: `sigmoid(bias + Σ weights[i] * x[i])`.
///
/// Stored on disk as JSON: `{ "weights": [8 numbers], "bias": number }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self, ModelError> {
        let model = Self { weights, bias };
        model.validate()?;
        Ok(model)
    }

    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let data = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_str(&data).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::Shape {
                expected: FEATURE_COUNT,
                found: self.weights.len(),
            });
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::NonFinite);
        }
        Ok(())
    }
}

impl ScoringCapability for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let z = self.bias
            + self
                .weights
                .iter()
                .zip(features.as_slice())
                .map(|(w, x)| w * x)
                .sum::<f64>();
        let p = 1.0 / (1.0 + (-z).exp());
        if p.is_finite() {
            Ok(p)
        } else {
            Err(ModelError::Predict(format!("non-finite output for z={z}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn zeros() -> FeatureVector {
        FeatureVector([0.0; FEATURE_COUNT])
    }

    #[test]
    fn zero_model_predicts_half() {
        let m = LogisticModel::new(vec![0.0; FEATURE_COUNT], 0.0).unwrap();
        assert!((m.predict(&zeros()).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_push_probability() {
        let mut w = vec![0.0; FEATURE_COUNT];
        w[5] = 10.0; // contains_at
        let m = LogisticModel::new(w, -5.0).unwrap();
        let mut x = zeros();
        assert!(m.predict(&x).unwrap() < 0.01);
        x.0[5] = 1.0;
        assert!(m.predict(&x).unwrap() > 0.99);
    }

    #[test]
    fn wrong_shape_rejected() {
        let err = LogisticModel::new(vec![1.0; 3], 0.0).unwrap_err();
        assert!(matches!(err, ModelError::Shape { expected: 8, found: 3 }));
    }

    #[test]
    fn non_finite_rejected() {
        let mut w = vec![0.0; FEATURE_COUNT];
        w[0] = f64::NAN;
        assert!(matches!(
            LogisticModel::new(w, 0.0),
            Err(ModelError::NonFinite)
        ));
    }

    #[test]
    fn load_from_json_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"weights":[0.01,0.0,0.2,0.1,0.5,2.0,1.0,1.5],"bias":-4.0}}"#
        )
        .unwrap();
        f.flush().unwrap();

        let availability = ModelAvailability::load(Some(f.path()));
        assert!(availability.is_available());
        assert!(availability.capability().is_some());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let availability = ModelAvailability::load(Some(&dir.path().join("absent.json")));
        match availability {
            ModelAvailability::Unavailable { reason } => {
                assert!(reason.contains("absent.json"), "{reason}")
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }

    #[test]
    fn garbage_file_is_unavailable() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"not json").unwrap();
        f.flush().unwrap();
        assert!(!ModelAvailability::load(Some(f.path())).is_available());
    }

    #[test]
    fn no_path_is_unavailable() {
        let availability = ModelAvailability::load(None);
        assert!(!availability.is_available());
        assert!(availability.capability().is_none());
    }
}
