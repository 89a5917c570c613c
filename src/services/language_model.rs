// Language Model Resource
// Load-once lexicons shared by the sentiment, entity and topic analyzers.
// The built-in model is initialized once per process and is immutable
// afterwards; analyzers take it by reference so tests can inject a stub.

use std::collections::HashSet;
use std::sync::OnceLock;

const POSITIVE_TERMS: &[&str] = &[
    "good", "great", "excellent", "love", "loved", "happy", "joy", "win", "winning", "hope",
    "hopeful", "strong", "strength", "success", "successful", "improve", "improved", "improving",
    "growth", "gain", "gains", "rise", "rising", "recover", "recovery", "stable", "calm", "peace",
    "proud", "support", "trust", "safe", "better", "best", "positive", "progress", "thrive",
    "prosper", "prosperity", "celebrate", "victory", "optimistic", "free", "freedom", "fair",
    "honest", "brilliant", "amazing", "wonderful",
];

const NEGATIVE_TERMS: &[&str] = &[
    "bad", "worse", "worst", "hate", "hated", "sad", "angry", "anger", "fear", "afraid", "lose",
    "losing", "loss", "losses", "fail", "failed", "failure", "weak", "crisis", "collapse", "crash",
    "fall", "falling", "drop", "inflation", "shortage", "corrupt", "corruption", "fraud", "lie",
    "lies", "lying", "violence", "violent", "war", "threat", "danger", "dangerous", "poverty",
    "hunger", "broken", "chaos", "panic", "scam", "terrible", "awful", "horrible", "disaster",
    "negative", "censorship", "repression",
];

const NEGATION_TERMS: &[&str] = &[
    "not", "no", "never", "without", "cannot", "can't", "won't", "don't", "doesn't", "didn't",
    "isn't", "aren't", "wasn't", "neither", "nor",
];

const HONORIFICS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "president", "senator", "minister", "professor", "judge", "general",
    "governor", "mayor", "sir", "captain", "colonel",
];

const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "ltd", "llc", "bank", "ministry", "university", "company", "group", "agency",
    "party", "council", "committee", "fund", "institute", "association",
];

const LOCATION_CUES: &[&str] = &["in", "at", "near", "from", "across"];

const KNOWN_LOCATIONS: &[&str] = &[
    "venezuela", "caracas", "maracaibo", "colombia", "bogota", "europe", "london", "paris",
    "madrid", "washington", "america", "china", "russia", "brazil", "miami", "mexico", "argentina",
    "spain", "germany", "japan",
];

const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "then", "else", "of", "to", "in", "on", "at", "by",
    "for", "with", "about", "into", "over", "after", "before", "between", "out", "against", "during",
    "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "have", "has",
    "had", "will", "would", "can", "could", "should", "may", "might", "must", "shall", "this",
    "that", "these", "those", "it", "its", "he", "she", "they", "them", "his", "her", "their", "we",
    "us", "our", "you", "your", "i", "me", "my", "who", "what", "which", "when", "where", "why",
    "how", "all", "each", "more", "most", "some", "such", "only", "own", "same", "so", "than",
    "too", "very", "just", "as", "up", "down", "there", "here", "not", "no",
];

/// Immutable lexicon bundle, loaded once per process and shared
/// read-only across all calls.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    positive_terms: HashSet<String>,
    negative_terms: HashSet<String>,
    negation_terms: HashSet<String>,
    honorifics: HashSet<String>,
    org_suffixes: HashSet<String>,
    location_cues: HashSet<String>,
    known_locations: HashSet<String>,
    stopwords: HashSet<String>,
}

/// Lexicon overrides for constructing a lightweight stub model in tests.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    pub negation_terms: Vec<String>,
    pub honorifics: Vec<String>,
    pub org_suffixes: Vec<String>,
    pub location_cues: Vec<String>,
    pub known_locations: Vec<String>,
    pub stopwords: Vec<String>,
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl LanguageModel {
    /// The embedded lexicons that ship with the crate.
    pub fn builtin() -> Self {
        Self {
            positive_terms: to_set(POSITIVE_TERMS),
            negative_terms: to_set(NEGATIVE_TERMS),
            negation_terms: to_set(NEGATION_TERMS),
            honorifics: to_set(HONORIFICS),
            org_suffixes: to_set(ORG_SUFFIXES),
            location_cues: to_set(LOCATION_CUES),
            known_locations: to_set(KNOWN_LOCATIONS),
            stopwords: to_set(STOPWORDS),
        }
    }

    /// Build a model from explicit lexicons (test stubs, domain packs).
    pub fn from_lexicons(lexicons: Lexicons) -> Self {
        let lower = |v: Vec<String>| -> HashSet<String> {
            v.into_iter().map(|w| w.to_lowercase()).collect()
        };
        Self {
            positive_terms: lower(lexicons.positive_terms),
            negative_terms: lower(lexicons.negative_terms),
            negation_terms: lower(lexicons.negation_terms),
            honorifics: lower(lexicons.honorifics),
            org_suffixes: lower(lexicons.org_suffixes),
            location_cues: lower(lexicons.location_cues),
            known_locations: lower(lexicons.known_locations),
            stopwords: lower(lexicons.stopwords),
        }
    }

    /// Process-wide shared instance of the built-in model.
    pub fn global() -> &'static LanguageModel {
        static MODEL: OnceLock<LanguageModel> = OnceLock::new();
        MODEL.get_or_init(LanguageModel::builtin)
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive_terms.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative_terms.contains(token)
    }

    pub fn is_negation(&self, token: &str) -> bool {
        self.negation_terms.contains(token)
    }

    /// Honorific check; trailing periods ("Dr.") are ignored.
    pub fn is_honorific(&self, token: &str) -> bool {
        self.honorifics
            .contains(token.trim_end_matches('.').to_lowercase().as_str())
    }

    pub fn is_org_suffix(&self, token: &str) -> bool {
        self.org_suffixes
            .contains(token.trim_end_matches('.').to_lowercase().as_str())
    }

    pub fn is_location_cue(&self, token: &str) -> bool {
        self.location_cues.contains(token.to_lowercase().as_str())
    }

    pub fn is_known_location(&self, token: &str) -> bool {
        self.known_locations.contains(token.to_lowercase().as_str())
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_shared() {
        let a = LanguageModel::global() as *const LanguageModel;
        let b = LanguageModel::global() as *const LanguageModel;
        assert_eq!(a, b);
    }

    #[test]
    fn test_builtin_lexicon_lookups() {
        let model = LanguageModel::builtin();
        assert!(model.is_positive("hope"));
        assert!(model.is_negative("crisis"));
        assert!(model.is_negation("never"));
        assert!(model.is_honorific("Dr."));
        assert!(model.is_org_suffix("Corp"));
        assert!(model.is_known_location("Caracas"));
        assert!(model.is_stopword("the"));
    }

    #[test]
    fn test_stub_model_overrides() {
        let model = LanguageModel::from_lexicons(Lexicons {
            positive_terms: vec!["zorp".to_string()],
            ..Default::default()
        });
        assert!(model.is_positive("zorp"));
        assert!(!model.is_positive("good"));
    }
}
