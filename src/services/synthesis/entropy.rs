// Entropy Calculation
// Shannon entropy over a symbol stream, in bits.

use crate::models::SignalPayload;
use std::collections::HashMap;
use std::hash::Hash;

/// Shannon entropy of a symbol sequence: `-Σ p_i · log2(p_i)` over the
/// observed symbol frequencies. Empty input yields 0. The result is never
/// negative and 0 exactly when at most one distinct symbol occurs.
pub fn shannon_entropy<T, I>(symbols: I) -> f64
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    let mut total = 0usize;
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let entropy = -counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * p.log2()
        })
        .sum::<f64>();

    // A single-symbol stream computes -0.0; report plain zero.
    entropy.max(0.0)
}

/// Entropy of the character stream of a text.
pub fn char_entropy(text: &str) -> f64 {
    shannon_entropy(text.chars())
}

/// Entropy over word tokens as symbols.
pub fn token_entropy(tokens: &[String]) -> f64 {
    shannon_entropy(tokens.iter())
}

/// Entropy of a captured payload. Text is measured as a character
/// stream, a list of items as whole-item symbols, and a structured
/// table carries no linguistic signal.
pub fn payload_entropy(payload: &SignalPayload) -> f64 {
    match payload {
        SignalPayload::Text(text) => char_entropy(text),
        SignalPayload::Items(items) => shannon_entropy(items.iter()),
        SignalPayload::Table(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_constant_input_is_zero() {
        assert_eq!(char_entropy("aaaa"), 0.0);
    }

    #[test]
    fn test_two_equal_symbols_is_one_bit() {
        assert_eq!(char_entropy("ab"), 1.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(char_entropy(""), 0.0);
        assert_eq!(token_entropy(&[]), 0.0);
    }

    #[test]
    fn test_uniform_k_symbols_is_log2_k() {
        // 8 equally frequent symbols -> exactly 3 bits.
        let text = "abcdefgh";
        assert!((char_entropy(text) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_table_payload_is_zero() {
        let mut table = HashMap::new();
        table.insert("5. Exchange Rate".to_string(), "1.0842".to_string());
        assert_eq!(payload_entropy(&SignalPayload::Table(table)), 0.0);
    }

    #[test]
    fn test_item_payload_counts_whole_items() {
        let items = vec!["same".to_string(), "same".to_string()];
        assert_eq!(payload_entropy(&SignalPayload::Items(items)), 0.0);

        let mixed = vec!["one".to_string(), "two".to_string()];
        assert_eq!(payload_entropy(&SignalPayload::Items(mixed)), 1.0);
    }

    #[test]
    fn test_diversity_increases_entropy() {
        // Same length, more distinct symbols.
        assert!(char_entropy("aabb") > char_entropy("aaab"));
        assert!(char_entropy("abcd") > char_entropy("aabb"));
    }

    #[test]
    fn test_never_negative() {
        for text in ["", "a", "ab", "aab", "hello world"] {
            assert!(char_entropy(text) >= 0.0);
        }
    }
}
