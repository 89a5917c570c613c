// Sentiment Scoring
// Lexicon-based polarity plus bucket distribution over a corpus.

use crate::models::SentimentDistribution;
use crate::services::language_model::LanguageModel;
use crate::services::text_processor::{scrub_social_markup, tokenize};

/// Fixed bucket boundaries. Items scoring inside (-0.05, +0.05) are
/// neutral; the thresholds are part of the metric definition and are not
/// user-configurable.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity of one text block in [-1, 1]. Lexicon hits are tallied with
/// a single-token negation window ("not good" counts as negative); the
/// score is the signed share of hits. No hits or empty text score 0.
pub fn score_polarity(text: &str, model: &LanguageModel) -> f64 {
    let tokens = tokenize(&scrub_social_markup(text));
    if tokens.is_empty() {
        return 0.0;
    }

    let mut positive = 0.0f64;
    let mut negative = 0.0f64;
    let mut negated = false;

    for token in &tokens {
        if model.is_negation(token) {
            negated = true;
            continue;
        }
        if model.is_positive(token) {
            if negated {
                negative += 1.0;
            } else {
                positive += 1.0;
            }
        } else if model.is_negative(token) {
            if negated {
                positive += 1.0;
            } else {
                negative += 1.0;
            }
        }
        negated = false;
    }

    let hits = positive + negative;
    if hits == 0.0 {
        return 0.0;
    }
    (positive - negative) / hits
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bucket distribution over a corpus, in percent. Positive and negative
/// shares are rounded to two decimals and neutral takes the exact
/// remainder, so the three always sum to 100. An empty corpus is fully
/// neutral.
pub fn score_distribution(corpus: &[String], model: &LanguageModel) -> SentimentDistribution {
    if corpus.is_empty() {
        return SentimentDistribution::default();
    }

    let mut positive_count = 0usize;
    let mut negative_count = 0usize;
    let mut polarity_sum = 0.0f64;

    for item in corpus {
        let polarity = score_polarity(item, model);
        polarity_sum += polarity;
        if polarity > POSITIVE_THRESHOLD {
            positive_count += 1;
        } else if polarity < NEGATIVE_THRESHOLD {
            negative_count += 1;
        }
    }

    let total = corpus.len() as f64;
    let positive = round2(positive_count as f64 * 100.0 / total);
    let negative = round2(negative_count as f64 * 100.0 / total);

    SentimentDistribution {
        positive,
        negative,
        neutral: 100.0 - positive - negative,
        mean_polarity: polarity_sum / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::language_model::LanguageModel;

    fn model() -> &'static LanguageModel {
        LanguageModel::global()
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(score_polarity("", model()), 0.0);
    }

    #[test]
    fn test_positive_text() {
        let p = score_polarity("great success, strong growth", model());
        assert!(p > POSITIVE_THRESHOLD);
        assert!(p <= 1.0);
    }

    #[test]
    fn test_negative_text() {
        let p = score_polarity("crisis and collapse, total failure", model());
        assert!(p < NEGATIVE_THRESHOLD);
        assert!(p >= -1.0);
    }

    #[test]
    fn test_negation_flips_hit() {
        let plain = score_polarity("good", model());
        let negated = score_polarity("not good", model());
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_empty_corpus_distribution() {
        let dist = score_distribution(&[], model());
        assert_eq!(dist.positive, 0.0);
        assert_eq!(dist.negative, 0.0);
        assert_eq!(dist.neutral, 100.0);
    }

    #[test]
    fn test_all_neutral_corpus() {
        // Ten items with no lexicon hits at all score exactly 0 polarity.
        let corpus: Vec<String> = (0..10).map(|i| format!("item number {}", i)).collect();
        let dist = score_distribution(&corpus, model());
        assert_eq!(dist.positive, 0.0);
        assert_eq!(dist.negative, 0.0);
        assert_eq!(dist.neutral, 100.0);
        assert_eq!(dist.mean_polarity, 0.0);
    }

    #[test]
    fn test_distribution_sums_to_100() {
        let corpus = vec![
            "great win".to_string(),
            "total crisis".to_string(),
            "the weather today".to_string(),
            "hope and progress".to_string(),
            "nothing at all".to_string(),
            "fraud everywhere".to_string(),
            "plain report".to_string(),
        ];
        let dist = score_distribution(&corpus, model());
        assert!((dist.positive + dist.negative + dist.neutral - 100.0).abs() < 1e-9);
        assert!(dist.positive > 0.0);
        assert!(dist.negative > 0.0);
    }
}
