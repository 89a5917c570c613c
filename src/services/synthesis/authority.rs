// Authority Classification
// Rule-based partition of an authored corpus into systemic (high-authority)
// and organic (grassroots) voices. Each rule is a small strategy object so
// the institutional allow-list can grow without touching control flow.

use crate::models::{AuthoredItem, ClassificationSplit, SourceClass};
use crate::services::config_store::ClassificationConfig;
use std::collections::HashSet;
use tracing::debug;

/// One sufficient condition for marking an item systemic.
pub trait AuthorityRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn matches(&self, item: &AuthoredItem) -> bool;
}

/// Platform-verified accounts.
pub struct VerifiedBadgeRule;

impl AuthorityRule for VerifiedBadgeRule {
    fn name(&self) -> &'static str {
        "verified_badge"
    }

    fn matches(&self, item: &AuthoredItem) -> bool {
        item.verified
    }
}

/// Accounts with reach above a fixed follower threshold.
pub struct FollowerThresholdRule {
    pub min_followers: u64,
}

impl AuthorityRule for FollowerThresholdRule {
    fn name(&self) -> &'static str {
        "follower_threshold"
    }

    fn matches(&self, item: &AuthoredItem) -> bool {
        item.follower_count > self.min_followers
    }
}

/// Posts published through institutional tooling (media studios,
/// scheduling suites). Matching is case-insensitive on the source label.
pub struct InstitutionalSourceRule {
    sources: HashSet<String>,
}

impl InstitutionalSourceRule {
    pub fn new<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            sources: sources
                .into_iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl AuthorityRule for InstitutionalSourceRule {
    fn name(&self) -> &'static str {
        "institutional_source"
    }

    fn matches(&self, item: &AuthoredItem) -> bool {
        !item.source_label.is_empty() && self.sources.contains(&item.source_label.to_lowercase())
    }
}

/// Applies its rules in order; any match marks the item systemic.
/// Total over all inputs: every item gets exactly one label.
pub struct AuthorityClassifier {
    rules: Vec<Box<dyn AuthorityRule>>,
}

impl AuthorityClassifier {
    pub fn new(rules: Vec<Box<dyn AuthorityRule>>) -> Self {
        Self { rules }
    }

    /// The default rule set: verified badge, follower threshold and the
    /// configured institutional source allow-list.
    pub fn from_config(config: &ClassificationConfig) -> Self {
        Self::new(vec![
            Box::new(VerifiedBadgeRule),
            Box::new(FollowerThresholdRule {
                min_followers: config.follower_threshold,
            }),
            Box::new(InstitutionalSourceRule::new(&config.institutional_sources)),
        ])
    }

    /// Name of the first rule the item satisfies, if any.
    pub fn matching_rule(&self, item: &AuthoredItem) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(item))
            .map(|rule| rule.name())
    }

    pub fn classify(&self, item: &AuthoredItem) -> SourceClass {
        if self.matching_rule(item).is_some() {
            SourceClass::Systemic
        } else {
            SourceClass::Organic
        }
    }

    /// Partition a corpus. Every item lands on exactly one side.
    pub fn split(&self, items: &[AuthoredItem]) -> ClassificationSplit {
        let mut split = ClassificationSplit::default();
        for item in items {
            match self.matching_rule(item) {
                Some(rule) => {
                    debug!(rule, followers = item.follower_count, "item classified systemic");
                    split.systemic_items.push(item.clone());
                }
                None => split.organic_items.push(item.clone()),
            }
        }
        split
    }
}
