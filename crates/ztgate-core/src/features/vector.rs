//! Numeric feature vector handed to a scoring capability.

use super::UrlFeatures;
use serde::{Deserialize, Serialize};

/// Number of dimensions in a [`FeatureVector`].
pub const FEATURE_COUNT: usize = 8;

/// Ordered features:
/// `[length, host_length, dot_count, slash_count, hostname_entropy,
///   contains_at, contains_percent, suspicious_tld]`.
///
/// Booleans are encoded as 0.0 / 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_features(f: &UrlFeatures) -> Self {
        Self([
            f.length as f64,
            f.host_length as f64,
            f.dot_count as f64,
            f.slash_count as f64,
            f.hostname_entropy,
            flag(f.contains_at),
            flag(f.contains_percent),
            flag(f.suspicious_tld),
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}
