//! Character-distribution entropy.

use std::collections::HashMap;

/// Shannon entropy in bits of the character-frequency distribution of `text`.
///
/// Returns 0 for an empty string.
pub fn shannon_entropy(text: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn single_symbol_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn uniform_distribution() {
        assert!((shannon_entropy("ab") - 1.0).abs() < 1e-12);
        assert!((shannon_entropy("abcd") - 2.0).abs() < 1e-12);
        assert!((shannon_entropy("aabbccdd") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn random_looking_host_is_high() {
        // 20 distinct characters: log2(20) ~ 4.32
        assert!(shannon_entropy("qz7x1kp9w3m5v8b2n4c6") > 4.2);
    }
}
