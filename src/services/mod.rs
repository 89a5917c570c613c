// Espejo Core Services

pub mod config_store;
pub mod language_model;
pub mod synthesis;
pub mod text_processor;

pub use config_store::*;
pub use language_model::{LanguageModel, Lexicons};
pub use text_processor::*;

// Re-export synthesis module functions
pub use synthesis::{
    contamination_index,
    economic_energy,
    extract_top_entities,
    extract_topics,
    payload_entropy,
    placeholder_topics,
    reading_ease,
    score_distribution,
    score_polarity,
    shannon_entropy,
    synthesize,
    AuthorityClassifier,
    TopicError,
};
