// Espejo Data Models
// Wire-shaped types exchanged with the presentation collaborators

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============ Captured Signals ============

/// Raw payload handed over by an upstream capture step.
///
/// Fetchers deliver whatever shape the source produced: one long document,
/// a list of short items, or a structured metadata table. A table carries
/// no linguistic signal of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignalPayload {
    Text(String),
    Items(Vec<String>),
    Table(HashMap<String, String>),
}

/// Economic input: either the bare rate or the raw quote payload
/// as returned by the exchange-rate API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EconomicSignal {
    Rate(f64),
    Quote(HashMap<String, String>),
}

// ============ Authored Corpus ============

/// One captured post plus the authorship metadata used for source
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoredItem {
    pub text: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub source_label: String,
}

impl AuthoredItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verified: false,
            follower_count: 0,
            source_label: String::new(),
        }
    }
}

/// Which side of the authority partition an item landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceClass {
    Systemic,
    Organic,
}

/// Total partition of an authored corpus: every item belongs to exactly
/// one side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationSplit {
    pub systemic_items: Vec<AuthoredItem>,
    pub organic_items: Vec<AuthoredItem>,
}

impl ClassificationSplit {
    pub fn total(&self) -> usize {
        self.systemic_items.len() + self.organic_items.len()
    }
}

/// Share of a corpus attributed to systemic sources, in percent.
///
/// `NoData` is deliberately distinct from a measured 0%: the first means
/// there was nothing to classify, the second that classification ran and
/// found no systemic voices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "percent", rename_all = "camelCase")]
pub enum ContaminationIndex {
    Measured(f64),
    NoData,
}

impl ContaminationIndex {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Measured(p) => Some(*p),
            Self::NoData => None,
        }
    }
}

// ============ Metric Results ============

/// Bucket shares over a corpus, in percent. The three shares always sum
/// to exactly 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mean_polarity: f64,
}

impl Default for SentimentDistribution {
    fn default() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 100.0,
            mean_polarity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Organization,
    Location,
}

impl EntityKind {
    pub fn all() -> [EntityKind; 3] {
        [Self::Person, Self::Organization, Self::Location]
    }
}

/// A recognized entity grouped by exact surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMention {
    pub text: String,
    pub kind: EntityKind,
    pub count: u32,
}

/// One latent topic, summarized by its highest-weighted terms in
/// descending weight order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub index: i32,
    pub top_terms: Vec<String>,
}

/// The full analysis bundle computed for one corpus (undivided, systemic
/// or organic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusAnalysis {
    pub item_count: i32,
    pub sentiment: SentimentDistribution,
    pub entities: Vec<EntityMention>,
    pub topics: Vec<Topic>,
    pub readability: f64,
}

// ============ Synthesis Request ============

/// How rich a diagnostic the caller wants. Each level is a superset of
/// the previous one's populated metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    /// Entropy and economic energy only.
    Signal,
    /// Adds sentiment, entities, topics and readability over the
    /// undivided corpus.
    Discourse,
    /// Adds the authority split, per-population analyses and the
    /// contamination index.
    #[default]
    Provenance,
}

impl DiagnosticLevel {
    pub fn from_str(val: &str) -> Self {
        match val.trim().to_lowercase().as_str() {
            "signal" => Self::Signal,
            "discourse" => Self::Discourse,
            _ => Self::Provenance,
        }
    }
}

/// Everything a synthesis call may consume. All inputs are optional;
/// absent inputs simply leave the matching metrics unpopulated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    #[serde(default)]
    pub linguistic_signal: Option<SignalPayload>,
    #[serde(default)]
    pub economic_signal: Option<EconomicSignal>,
    #[serde(default)]
    pub authored_items: Vec<AuthoredItem>,
    /// Used by the upstream fetch step only; echoed into the record.
    #[serde(default)]
    pub intent_keyword: Option<String>,
    #[serde(default)]
    pub level: DiagnosticLevel,
}

// ============ Diagnostic Record ============

/// Item counts on each side of the authority partition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitCounts {
    pub systemic: i32,
    pub organic: i32,
}

/// The orchestrator's output: one immutable mapping from metric name to
/// computed value, versioned by level. Created fresh per synthesis call
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub request_id: String,
    pub record_version: String,
    pub level: DiagnosticLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linguistic_entropy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economic_energy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<CorpusAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systemic: Option<CorpusAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organic: Option<CorpusAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_counts: Option<SplitCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contamination: Option<ContaminationIndex>,
}
