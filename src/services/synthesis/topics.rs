// Topic Extraction
// Latent topic discovery over a corpus of short documents: a
// document-frequency-filtered vocabulary fed into a collapsed Gibbs
// sampler with a fixed seed.

use crate::models::Topic;
use crate::services::config_store::TopicConfig;
use crate::services::language_model::LanguageModel;
use crate::services::text_processor::{scrub_social_markup, tokenize};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

const ALPHA: f64 = 0.1;
const BETA: f64 = 0.01;
const MIN_TERM_LEN: usize = 3;

#[derive(Error, Debug)]
pub enum TopicError {
    #[error("insufficient data for topic modeling: {0}")]
    InsufficientData(String),
}

/// Tokenized documents plus the filtered vocabulary in first-occurrence
/// order. Term ids are indices into `terms`.
struct Vocabulary {
    terms: Vec<String>,
    docs: Vec<Vec<usize>>,
}

fn build_vocabulary(
    corpus: &[String],
    config: &TopicConfig,
    model: &LanguageModel,
) -> Vocabulary {
    let tokenized: Vec<Vec<String>> = corpus
        .iter()
        .map(|doc| {
            tokenize(&scrub_social_markup(doc))
                .into_iter()
                .filter(|t| t.len() >= MIN_TERM_LEN && !model.is_stopword(t))
                .collect()
        })
        .collect();

    // Document frequency per term.
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for tokens in &tokenized {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in distinct {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let doc_count = corpus.len();
    let max_df = (config.max_doc_ratio * doc_count as f64).floor() as usize;
    let keep = |term: &str| -> bool {
        let df = doc_freq.get(term).copied().unwrap_or(0);
        df >= config.min_doc_freq && (doc_count < 2 || df <= max_df.max(1))
    };

    // Vocabulary in first-occurrence order across the corpus scan; this
    // order also breaks ranking ties later.
    let mut term_ids: HashMap<String, usize> = HashMap::new();
    let mut terms: Vec<String> = Vec::new();
    let mut docs: Vec<Vec<usize>> = Vec::with_capacity(tokenized.len());

    for tokens in &tokenized {
        let mut doc = Vec::with_capacity(tokens.len());
        for token in tokens {
            if !keep(token) {
                continue;
            }
            let id = *term_ids.entry(token.clone()).or_insert_with(|| {
                terms.push(token.clone());
                terms.len() - 1
            });
            doc.push(id);
        }
        docs.push(doc);
    }

    Vocabulary { terms, docs }
}

/// Derive `topic_count` topics from the corpus, each summarized by its
/// `terms_per_topic` highest-weighted terms in descending weight order
/// (ties broken by vocabulary insertion order).
///
/// Fails with `TopicError::InsufficientData` when the corpus holds fewer
/// documents than `topic_count`, or when the vocabulary is empty after
/// the document-frequency filter. The sampler is seeded from
/// `config.seed`, so identical inputs produce identical topics.
pub fn extract_topics(
    corpus: &[String],
    config: &TopicConfig,
    model: &LanguageModel,
) -> Result<Vec<Topic>, TopicError> {
    if config.topic_count == 0 {
        return Ok(vec![]);
    }
    if corpus.len() < config.topic_count {
        return Err(TopicError::InsufficientData(format!(
            "{} documents for {} topics",
            corpus.len(),
            config.topic_count
        )));
    }

    let vocabulary = build_vocabulary(corpus, config, model);
    let term_count = vocabulary.terms.len();
    if term_count == 0 || vocabulary.docs.iter().all(|d| d.is_empty()) {
        return Err(TopicError::InsufficientData(
            "vocabulary empty after frequency filtering".to_string(),
        ));
    }

    let k = config.topic_count;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    // Collapsed Gibbs state.
    let mut doc_topic = vec![vec![0usize; k]; vocabulary.docs.len()];
    let mut topic_term = vec![vec![0usize; term_count]; k];
    let mut topic_total = vec![0usize; k];
    let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(vocabulary.docs.len());

    for (d, doc) in vocabulary.docs.iter().enumerate() {
        let mut doc_assignments = Vec::with_capacity(doc.len());
        for &term in doc {
            let topic = rng.random_range(0..k);
            doc_topic[d][topic] += 1;
            topic_term[topic][term] += 1;
            topic_total[topic] += 1;
            doc_assignments.push(topic);
        }
        assignments.push(doc_assignments);
    }

    let beta_sum = BETA * term_count as f64;
    let mut weights = vec![0.0f64; k];

    for _ in 0..config.iterations {
        for (d, doc) in vocabulary.docs.iter().enumerate() {
            for (pos, &term) in doc.iter().enumerate() {
                let old = assignments[d][pos];
                doc_topic[d][old] -= 1;
                topic_term[old][term] -= 1;
                topic_total[old] -= 1;

                let mut total_weight = 0.0;
                for t in 0..k {
                    let w = (doc_topic[d][t] as f64 + ALPHA)
                        * (topic_term[t][term] as f64 + BETA)
                        / (topic_total[t] as f64 + beta_sum);
                    weights[t] = w;
                    total_weight += w;
                }

                let mut target = rng.random::<f64>() * total_weight;
                let mut new = k - 1;
                for (t, &w) in weights.iter().enumerate() {
                    target -= w;
                    if target <= 0.0 {
                        new = t;
                        break;
                    }
                }

                doc_topic[d][new] += 1;
                topic_term[new][term] += 1;
                topic_total[new] += 1;
                assignments[d][pos] = new;
            }
        }
    }

    let topics = topic_term
        .iter()
        .enumerate()
        .map(|(index, counts)| {
            let mut ranked: Vec<usize> = (0..term_count).filter(|&v| counts[v] > 0).collect();
            ranked.sort_by(|&a, &b| counts[b].cmp(&counts[a]).then(a.cmp(&b)));
            ranked.truncate(config.terms_per_topic);
            Topic {
                index: index as i32,
                top_terms: ranked
                    .into_iter()
                    .map(|v| vocabulary.terms[v].clone())
                    .collect(),
            }
        })
        .collect();

    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> &'static LanguageModel {
        LanguageModel::global()
    }

    fn config(topic_count: usize) -> TopicConfig {
        TopicConfig {
            topic_count,
            ..TopicConfig::default()
        }
    }

    fn sample_corpus() -> Vec<String> {
        let economy = "inflation prices market economy currency devaluation";
        let football = "football match goal striker defender stadium";
        let mut corpus = Vec::new();
        for _ in 0..6 {
            corpus.push(economy.to_string());
            corpus.push(football.to_string());
        }
        corpus
    }

    #[test]
    fn test_too_few_documents() {
        let corpus = vec!["one lonely document".to_string()];
        let err = extract_topics(&corpus, &config(5), model()).unwrap_err();
        assert!(matches!(err, TopicError::InsufficientData(_)));
    }

    #[test]
    fn test_vocabulary_empty_after_filtering() {
        // Every term appears in exactly one document, below min_doc_freq.
        let corpus = vec![
            "alpha bravo charlie".to_string(),
            "delta echo foxtrot".to_string(),
            "golf hotel india".to_string(),
        ];
        let err = extract_topics(&corpus, &config(2), model()).unwrap_err();
        assert!(matches!(err, TopicError::InsufficientData(_)));
    }

    #[test]
    fn test_topic_shape() {
        let topics = extract_topics(&sample_corpus(), &config(2), model()).unwrap();
        assert_eq!(topics.len(), 2);
        for (i, topic) in topics.iter().enumerate() {
            assert_eq!(topic.index, i as i32);
            assert!(!topic.top_terms.is_empty());
            assert!(topic.top_terms.len() <= 5);
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let corpus = sample_corpus();
        let first = extract_topics(&corpus, &config(2), model()).unwrap();
        let second = extract_topics(&corpus, &config(2), model()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rare_terms_excluded() {
        let mut corpus = sample_corpus();
        corpus.push("economy inflation singularword".to_string());
        let topics = extract_topics(&corpus, &config(2), model()).unwrap();
        for topic in &topics {
            assert!(!topic.top_terms.iter().any(|t| t == "singularword"));
        }
    }

    #[test]
    fn test_stopwords_never_surface() {
        let corpus = vec![
            "the market and the prices".to_string(),
            "the market and the economy".to_string(),
            "the football and the stadium crowd".to_string(),
            "the football and the stadium goal".to_string(),
            "the prices of the economy".to_string(),
        ];
        let topics = extract_topics(&corpus, &config(2), model()).unwrap();
        for topic in &topics {
            assert!(!topic.top_terms.iter().any(|t| t == "the" || t == "and"));
        }
    }
}
