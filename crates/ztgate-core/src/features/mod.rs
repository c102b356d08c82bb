//! URL feature extraction.
//!
//! Turns a raw URL string into the fixed set of lexical signals consumed by the
//! heuristic scorer and the optional classifier. Extraction never fails: input
//! without an authority component yields a degenerate feature set with an
//! empty host.

mod entropy;
mod host;
mod vector;

pub use entropy::shannon_entropy;
pub use host::{hostname_of, is_dotted_quad, lenient_authority_host};
pub use vector::{FeatureVector, FEATURE_COUNT};

use serde::Serialize;

/// Top-level domains commonly abused by throwaway phishing domains.
pub const SUSPICIOUS_TLDS: [&str; 9] = [
    ".tk", ".ml", ".ga", ".cf", ".gq", ".xyz", ".top", ".club", ".work",
];

/// Lexical signals extracted from a single URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlFeatures {
    /// Characters in the raw URL.
    pub length: usize,
    /// Characters in the hostname (0 when the URL has no parseable host).
    pub host_length: usize,
    /// Dots in the hostname.
    pub dot_count: usize,
    /// Slashes anywhere in the raw URL.
    pub slash_count: usize,
    /// Hostname is a literal dotted-quad IPv4 address.
    pub has_ip: bool,
    /// Raw URL contains `@` (userinfo redirect trick).
    pub contains_at: bool,
    /// Raw URL contains `%` (percent-encoded obfuscation).
    pub contains_percent: bool,
    /// Shannon entropy of the hostname characters, in bits.
    pub hostname_entropy: f64,
    /// Hostname ends with one of [`SUSPICIOUS_TLDS`].
    pub suspicious_tld: bool,
    /// Raw URL starts with `https` (case-insensitive).
    pub has_https: bool,
}

impl UrlFeatures {
    /// Ordered numeric vector handed to a scoring capability.
    pub fn to_vector(&self) -> FeatureVector {
        FeatureVector::from_features(self)
    }
}

/// Extract features from `url`.
///
/// # Examples
///
/// - `extract("http://192.168.1.1/login").has_ip` → `true`
/// - `extract("not a url").host_length` → `0`
pub fn extract(url: &str) -> UrlFeatures {
    let host = hostname_of(url).unwrap_or_default();

    UrlFeatures {
        length: url.chars().count(),
        host_length: host.chars().count(),
        dot_count: host.matches('.').count(),
        slash_count: url.matches('/').count(),
        has_ip: is_dotted_quad(&host),
        contains_at: url.contains('@'),
        contains_percent: url.contains('%'),
        hostname_entropy: shannon_entropy(&host),
        suspicious_tld: SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)),
        has_https: url
            .get(..5)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("https")),
    }
}
