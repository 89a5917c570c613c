// Synthesis Module
// Signal synthesis core organized into specialized submodules:
// - entropy: Shannon entropy over symbol streams
// - sentiment: lexicon polarity and bucket distribution
// - entities: frequency-ranked named-entity mentions
// - topics: seeded latent topic discovery
// - readability: Flesch reading ease
// - authority: systemic/organic source classification rules
// - contamination: systemic share of a classified corpus
// - orchestrator: level-gated assembly of the diagnostic record

pub mod authority;
pub mod contamination;
pub mod entities;
pub mod entropy;
pub mod orchestrator;
pub mod readability;
pub mod sentiment;
pub mod topics;

// Re-export commonly used functions
pub use authority::{
    AuthorityClassifier,
    AuthorityRule,
    FollowerThresholdRule,
    InstitutionalSourceRule,
    VerifiedBadgeRule,
};
pub use contamination::contamination_index;
pub use entities::extract_top_entities;
pub use entropy::{char_entropy, payload_entropy, shannon_entropy, token_entropy};
pub use orchestrator::{
    economic_energy,
    placeholder_topics,
    synthesize,
    NO_CONVERSATION_LABEL,
};
pub use readability::{reading_ease, EMPTY_TEXT_SCORE};
pub use sentiment::{score_distribution, score_polarity, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use topics::{extract_topics, TopicError};
