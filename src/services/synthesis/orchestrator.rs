// Synthesis Orchestration
// Assembles per-signal metrics into one DiagnosticRecord for the
// requested diagnostic level. Stateless: every call is independent and
// reentrant; sub-computations fail in isolation and are substituted with
// placeholders instead of aborting siblings.

use crate::models::{
    CorpusAnalysis, DiagnosticLevel, DiagnosticRecord, EconomicSignal, EntityKind, SplitCounts,
    SynthesisRequest, Topic,
};
use crate::services::config_store::EngineConfig;
use crate::services::language_model::LanguageModel;
use crate::services::synthesis::authority::AuthorityClassifier;
use crate::services::synthesis::contamination::contamination_index;
use crate::services::synthesis::entities::extract_top_entities;
use crate::services::synthesis::entropy::payload_entropy;
use crate::services::synthesis::readability::reading_ease;
use crate::services::synthesis::sentiment::score_distribution;
use crate::services::synthesis::topics::extract_topics;
use std::collections::HashSet;
use tracing::{info, warn};
use uuid::Uuid;

const RECORD_VERSION: &str = "synth-v1.0";

/// Term reported when topic modeling had nothing to work with.
pub const NO_CONVERSATION_LABEL: &str = "no conversation found";

/// Key under which the exchange-rate API reports the rate value.
const EXCHANGE_RATE_KEY: &str = "5. Exchange Rate";

/// Substitute topic list for a corpus with no modelable conversation.
pub fn placeholder_topics() -> Vec<Topic> {
    vec![Topic {
        index: 0,
        top_terms: vec![NO_CONVERSATION_LABEL.to_string()],
    }]
}

/// Resolve the economic input to its numeric energy value. A bare rate
/// passes through unchanged; a raw quote payload is resolved via its
/// exchange-rate key, with missing or unparseable values reading 0.
pub fn economic_energy(signal: &EconomicSignal) -> f64 {
    match signal {
        EconomicSignal::Rate(rate) => *rate,
        EconomicSignal::Quote(quote) => quote
            .get(EXCHANGE_RATE_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0),
    }
}

/// Run the full discourse analysis bundle over one corpus of texts.
/// Topic extraction is the only member that can fail; its error is
/// absorbed here and replaced with the placeholder list.
fn analyze_corpus(texts: &[String], model: &LanguageModel, config: &EngineConfig) -> CorpusAnalysis {
    let kinds: HashSet<EntityKind> = EntityKind::all().into_iter().collect();
    let joined = texts.join("\n");

    let topics = match extract_topics(texts, &config.topics, model) {
        Ok(topics) => topics,
        Err(err) => {
            warn!(error = %err, items = texts.len(), "topic extraction substituted");
            placeholder_topics()
        }
    };

    CorpusAnalysis {
        item_count: texts.len() as i32,
        sentiment: score_distribution(texts, model),
        entities: extract_top_entities(&joined, &kinds, config.analysis.entity_limit, model),
        topics,
        readability: reading_ease(&joined),
    }
}

fn item_texts(items: &[crate::models::AuthoredItem]) -> Vec<String> {
    items.iter().map(|item| item.text.clone()).collect()
}

/// Synthesize one diagnostic record from the supplied signals.
///
/// Order of assembly: entropy over the linguistic signal, economic
/// energy pass-through, then (level permitting) the discourse analyses
/// and the authority split with its contamination index. Absent inputs
/// leave their metrics unpopulated rather than failing.
pub fn synthesize(
    request: &SynthesisRequest,
    model: &LanguageModel,
    config: &EngineConfig,
) -> DiagnosticRecord {
    let request_id = Uuid::new_v4().to_string();
    let level = request.level;

    let linguistic_entropy = request.linguistic_signal.as_ref().map(payload_entropy);
    let economic = request.economic_signal.as_ref().map(economic_energy);

    let mut overall = None;
    let mut systemic = None;
    let mut organic = None;
    let mut split_counts = None;
    let mut contamination = None;

    if level >= DiagnosticLevel::Discourse {
        let texts = item_texts(&request.authored_items);

        if level >= DiagnosticLevel::Provenance {
            let classifier = AuthorityClassifier::from_config(&config.classification);
            let split = classifier.split(&request.authored_items);
            split_counts = Some(SplitCounts {
                systemic: split.systemic_items.len() as i32,
                organic: split.organic_items.len() as i32,
            });
            contamination = Some(contamination_index(&split));
            systemic = Some(analyze_corpus(
                &item_texts(&split.systemic_items),
                model,
                config,
            ));
            organic = Some(analyze_corpus(
                &item_texts(&split.organic_items),
                model,
                config,
            ));
            if config.analysis.include_overall {
                overall = Some(analyze_corpus(&texts, model, config));
            }
        } else {
            overall = Some(analyze_corpus(&texts, model, config));
        }
    }

    info!(
        request_id = %request_id,
        level = ?level,
        items = request.authored_items.len(),
        "synthesis.complete"
    );

    DiagnosticRecord {
        request_id,
        record_version: RECORD_VERSION.to_string(),
        level,
        intent_keyword: request.intent_keyword.clone(),
        linguistic_entropy,
        economic_energy: economic,
        overall,
        systemic,
        organic,
        split_counts,
        contamination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AuthoredItem, ContaminationIndex, SignalPayload};
    use std::collections::HashMap;

    fn model() -> &'static LanguageModel {
        LanguageModel::global()
    }

    fn request_with_items(items: Vec<AuthoredItem>, level: DiagnosticLevel) -> SynthesisRequest {
        SynthesisRequest {
            authored_items: items,
            level,
            ..SynthesisRequest::default()
        }
    }

    #[test]
    fn test_economic_energy_pass_through() {
        assert_eq!(economic_energy(&EconomicSignal::Rate(1.0842)), 1.0842);
    }

    #[test]
    fn test_economic_energy_from_quote() {
        let mut quote = HashMap::new();
        quote.insert("1. From_Currency Code".to_string(), "EUR".to_string());
        quote.insert("5. Exchange Rate".to_string(), "1.0842".to_string());
        assert_eq!(economic_energy(&EconomicSignal::Quote(quote)), 1.0842);

        let empty = HashMap::new();
        assert_eq!(economic_energy(&EconomicSignal::Quote(empty)), 0.0);
    }

    #[test]
    fn test_signal_level_skips_corpus() {
        let request = SynthesisRequest {
            linguistic_signal: Some(SignalPayload::Text("ab".to_string())),
            economic_signal: Some(EconomicSignal::Rate(36.5)),
            authored_items: vec![AuthoredItem::new("ignored at this level")],
            level: DiagnosticLevel::Signal,
            ..SynthesisRequest::default()
        };
        let record = synthesize(&request, model(), &EngineConfig::default());
        assert_eq!(record.linguistic_entropy, Some(1.0));
        assert_eq!(record.economic_energy, Some(36.5));
        assert!(record.overall.is_none());
        assert!(record.systemic.is_none());
        assert!(record.contamination.is_none());
    }

    #[test]
    fn test_empty_request_yields_record() {
        let record = synthesize(
            &SynthesisRequest::default(),
            model(),
            &EngineConfig::default(),
        );
        assert!(record.linguistic_entropy.is_none());
        assert!(record.economic_energy.is_none());
        assert_eq!(record.record_version, RECORD_VERSION);
        // Provenance is the default level; an empty corpus still reports
        // the no-data sentinel, never a 0% reading.
        assert_eq!(record.contamination, Some(ContaminationIndex::NoData));
    }

    #[test]
    fn test_insufficient_topics_substituted_not_fatal() {
        // One short document cannot support the default topic count; the
        // record must still come back whole.
        let request = request_with_items(
            vec![AuthoredItem::new("just one lonely post")],
            DiagnosticLevel::Discourse,
        );
        let record = synthesize(&request, model(), &EngineConfig::default());
        let overall = record.overall.expect("overall analysis present");
        assert_eq!(overall.topics, placeholder_topics());
        assert_eq!(overall.item_count, 1);
    }

    #[test]
    fn test_provenance_split_and_contamination() {
        let mut items = Vec::new();
        for i in 0..30 {
            let mut item = AuthoredItem::new(format!("official bulletin number {}", i));
            item.verified = true;
            items.push(item);
        }
        for i in 0..70 {
            items.push(AuthoredItem::new(format!("street voice number {}", i)));
        }

        let record = synthesize(
            &request_with_items(items, DiagnosticLevel::Provenance),
            model(),
            &EngineConfig::default(),
        );

        assert_eq!(record.contamination, Some(ContaminationIndex::Measured(30.0)));
        let counts = record.split_counts.unwrap();
        assert_eq!(counts.systemic, 30);
        assert_eq!(counts.organic, 70);
        assert_eq!(record.systemic.unwrap().item_count, 30);
        assert_eq!(record.organic.unwrap().item_count, 70);
        assert!(record.overall.is_some());
    }

    #[test]
    fn test_include_overall_toggle() {
        let mut config = EngineConfig::default();
        config.analysis.include_overall = false;
        let record = synthesize(
            &request_with_items(
                vec![AuthoredItem::new("a post")],
                DiagnosticLevel::Provenance,
            ),
            model(),
            &config,
        );
        assert!(record.overall.is_none());
        assert!(record.systemic.is_some());
    }

    #[test]
    fn test_keyword_echoed() {
        let request = SynthesisRequest {
            intent_keyword: Some("economia".to_string()),
            level: DiagnosticLevel::Signal,
            ..SynthesisRequest::default()
        };
        let record = synthesize(&request, model(), &EngineConfig::default());
        assert_eq!(record.intent_keyword.as_deref(), Some("economia"));
    }

    #[test]
    fn test_records_are_independent() {
        let request = request_with_items(
            vec![AuthoredItem::new("repeatable post")],
            DiagnosticLevel::Discourse,
        );
        let first = synthesize(&request, model(), &EngineConfig::default());
        let second = synthesize(&request, model(), &EngineConfig::default());
        assert_ne!(first.request_id, second.request_id);
        assert_eq!(
            first.overall.unwrap().item_count,
            second.overall.unwrap().item_count
        );
    }
}
