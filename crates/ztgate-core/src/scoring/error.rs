use std::path::PathBuf;

/// Failures of the optional scoring capability.
///
/// None of these abort an inspection: the aggregator falls back to the
/// heuristic result.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("model has {found} weights, expected {expected}")]
    Shape { expected: usize, found: usize },
    #[error("model parameters must be finite")]
    NonFinite,
    #[error("prediction failed: {0}")]
    Predict(String),
}
