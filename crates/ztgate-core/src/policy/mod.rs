//! Zero-trust access policy.
//!
//! Every request is judged on its own: identity first, then device posture,
//! then the risk score. Nothing is remembered between calls.
//!
//! A trusted device does not bypass the risk checks; it only unlocks them.

mod decision;
mod engine;
mod posture;

pub use decision::{Decision, PolicyContext, Verdict};
pub use engine::{PolicyEngine, PolicyThresholds, ANONYMOUS};
pub use posture::DevicePosture;
