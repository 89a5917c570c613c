// Engine Configuration Store
// Handles config file read/write with defaults and a backup of the
// previous revision.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub classification: ClassificationConfig,
    #[serde(default)]
    pub topics: TopicConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            classification: ClassificationConfig::default(),
            topics: TopicConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

/// Inputs to the systemic/organic classification rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationConfig {
    #[serde(default = "default_follower_threshold")]
    pub follower_threshold: u64,
    #[serde(default = "default_institutional_sources")]
    pub institutional_sources: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            follower_threshold: default_follower_threshold(),
            institutional_sources: default_institutional_sources(),
        }
    }
}

/// Topic model knobs. The seed is fixed so repeated runs over the same
/// corpus produce identical topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicConfig {
    #[serde(default = "default_topic_count")]
    pub topic_count: usize,
    #[serde(default = "default_terms_per_topic")]
    pub terms_per_topic: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_min_doc_freq")]
    pub min_doc_freq: usize,
    #[serde(default = "default_max_doc_ratio")]
    pub max_doc_ratio: f64,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            topic_count: default_topic_count(),
            terms_per_topic: default_terms_per_topic(),
            seed: default_seed(),
            min_doc_freq: default_min_doc_freq(),
            max_doc_ratio: default_max_doc_ratio(),
            iterations: default_iterations(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    #[serde(default = "default_entity_limit")]
    pub entity_limit: usize,
    /// Whether the undivided corpus is also analyzed at the provenance
    /// level, alongside the systemic/organic branches.
    #[serde(default = "default_true")]
    pub include_overall: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            entity_limit: default_entity_limit(),
            include_overall: true,
        }
    }
}

/// Reads and writes `EngineConfig` as JSON under a config directory.
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Per-user default location for the engine config.
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("espejo"))
    }

    fn config_path(&self) -> PathBuf {
        self.config_dir.join("engine.json")
    }

    /// Load the config, falling back to defaults when no file exists.
    /// A present-but-malformed file is an error rather than a silent reset.
    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(EngineConfig::default());
        }
        let raw = fs::read_to_string(&path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    /// Save the config, keeping the previous revision as `engine.json.bak`.
    pub fn save(&self, config: &EngineConfig) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        let path = self.config_path();
        if path.exists() {
            let backup = self.config_dir.join("engine.json.bak");
            let _ = fs::copy(&path, backup);
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&path, json)?;
        Ok(())
    }
}

// ============ Default Value Functions ============

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
fn default_follower_threshold() -> u64 {
    10_000
}
fn default_institutional_sources() -> Vec<String> {
    [
        "Twitter Media Studio",
        "Sprinklr",
        "Hootsuite",
        "Salesforce Social Studio",
        "SocialFlow",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_topic_count() -> usize {
    3
}
fn default_terms_per_topic() -> usize {
    5
}
fn default_seed() -> u64 {
    7
}
fn default_min_doc_freq() -> usize {
    2
}
fn default_max_doc_ratio() -> f64 {
    0.95
}
fn default_iterations() -> usize {
    64
}
fn default_entity_limit() -> usize {
    5
}
fn default_true() -> bool {
    true
}
