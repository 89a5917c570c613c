// Contamination Index
// Share of a corpus attributed to systemic sources.

use crate::models::{ClassificationSplit, ContaminationIndex};

/// Percentage of the split attributed to systemic items, in [0, 100].
/// An empty split reports `NoData` rather than 0 so "nothing systemic"
/// and "nothing to classify" stay distinguishable.
pub fn contamination_index(split: &ClassificationSplit) -> ContaminationIndex {
    let total = split.total();
    if total == 0 {
        return ContaminationIndex::NoData;
    }
    ContaminationIndex::Measured(100.0 * split.systemic_items.len() as f64 / total as f64)
}
