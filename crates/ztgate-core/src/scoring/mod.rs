//! Risk scoring.
//!
//! A deterministic rule engine ([`heuristic`]) produces an explainable score;
//! the [`RiskAggregator`] may refine ambiguous scores with an optional,
//! externally supplied [`ScoringCapability`]. A model can only raise the risk
//! established by the rules, never lower it.

mod aggregate;
mod error;
pub mod heuristic;
mod model;

pub use aggregate::{RiskAggregator, RiskAssessment, ScoringMode};
pub use error::ModelError;
pub use heuristic::{score as heuristic_score, HeuristicRule, HeuristicScore, RULES};
pub use model::{LogisticModel, ModelAvailability, ScoringCapability};
