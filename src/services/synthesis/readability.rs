// Readability Scoring
// Flesch reading ease over a text block; higher scores read easier.

use crate::services::text_processor::{scrub_social_markup, split_sentences, tokenize};

/// Score reported for input with no countable words. Wordless text is
/// "no signal", not an error.
pub const EMPTY_TEXT_SCORE: f64 = 0.0;

/// Heuristic syllable count: vowel groups, with a silent trailing "e"
/// discounted unless it closes a consonant-"le" ending. Every word
/// counts at least one syllable.
fn count_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    let is_vowel = |c: char| "aeiouy".contains(c);

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    let n = chars.len();
    let silent_e = n >= 2
        && chars[n - 1] == 'e'
        && !is_vowel(chars[n - 2])
        && !(n >= 3 && chars[n - 1] == 'e' && chars[n - 2] == 'l' && !is_vowel(chars[n - 3]));
    if silent_e && groups > 1 {
        groups -= 1;
    }

    groups.max(1)
}

/// Flesch reading ease:
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
pub fn reading_ease(text: &str) -> f64 {
    let scrubbed = scrub_social_markup(text);
    let words = tokenize(&scrubbed);
    if words.is_empty() {
        return EMPTY_TEXT_SCORE;
    }

    let sentence_count = split_sentences(&scrubbed).len().max(1) as f64;
    let word_count = words.len() as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    206.835 - 1.015 * (word_count / sentence_count) - 84.6 * (syllable_count as f64 / word_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_uses_constant() {
        assert_eq!(reading_ease(""), EMPTY_TEXT_SCORE);
        assert_eq!(reading_ease("!!! ???"), EMPTY_TEXT_SCORE);
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn test_simple_text_reads_easier_than_dense_text() {
        let simple = "The cat sat. The dog ran. We saw it all.";
        let dense = "Institutional macroeconomic destabilization precipitates \
                     extraordinary sociopolitical repercussions throughout interdependent \
                     administrative infrastructures.";
        assert!(reading_ease(simple) > reading_ease(dense));
    }

    #[test]
    fn test_monosyllabic_short_sentences_score_high() {
        let score = reading_ease("The sun is up. The sky is blue.");
        assert!(score > 90.0);
    }
}
