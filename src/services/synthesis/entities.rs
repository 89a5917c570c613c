// Entity Extraction
// Frequency-ranked proper-noun mentions, grouped by exact surface text.

use crate::models::{EntityKind, EntityMention};
use crate::services::language_model::LanguageModel;
use crate::services::text_processor::{scrub_social_markup, split_sentences, tokenize_cased};
use std::collections::{HashMap, HashSet};

struct Candidate {
    surface: String,
    kind: EntityKind,
}

fn is_capitalized(token: &str) -> bool {
    token
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false)
}

/// Classify a capitalized span using its left neighbor and its own tokens.
/// Cascade: honorific prefix -> Person; organization suffix ->
/// Organization; gazetteer hit or location cue -> Location; any other
/// mid-sentence span -> Person. Uncued single tokens that merely open a
/// sentence are dropped as sentence-case noise.
fn classify_span(
    span: &[String],
    prev: Option<&str>,
    at_sentence_start: bool,
    model: &LanguageModel,
) -> Option<Candidate> {
    // Peel leading honorifics off the surface; they act as the cue.
    let mut start = 0;
    while start < span.len() && model.is_honorific(&span[start]) {
        start += 1;
    }
    let had_honorific = start > 0;
    let body = &span[start..];
    if body.is_empty() {
        return None;
    }

    let surface = body.join(" ");

    if had_honorific {
        return Some(Candidate {
            surface,
            kind: EntityKind::Person,
        });
    }
    if body.len() > 1 && model.is_org_suffix(body.last().map(String::as_str).unwrap_or("")) {
        return Some(Candidate {
            surface,
            kind: EntityKind::Organization,
        });
    }
    if body.iter().any(|t| model.is_known_location(t)) {
        return Some(Candidate {
            surface,
            kind: EntityKind::Location,
        });
    }
    if prev.map(|p| model.is_location_cue(p)).unwrap_or(false) {
        return Some(Candidate {
            surface,
            kind: EntityKind::Location,
        });
    }
    if at_sentence_start && body.len() == 1 {
        return None;
    }
    Some(Candidate {
        surface,
        kind: EntityKind::Person,
    })
}

fn collect_candidates(sentence: &str, model: &LanguageModel, out: &mut Vec<Candidate>) {
    let tokens = tokenize_cased(sentence);
    let mut i = 0;

    while i < tokens.len() {
        let starts_span = is_capitalized(&tokens[i])
            && !(model.is_stopword(&tokens[i].to_lowercase()) && !model.is_honorific(&tokens[i]));
        if !starts_span {
            i += 1;
            continue;
        }

        let span_start = i;
        let mut span: Vec<String> = Vec::new();
        while i < tokens.len() && is_capitalized(&tokens[i]) {
            span.push(tokens[i].clone());
            i += 1;
        }

        let prev = span_start.checked_sub(1).map(|p| tokens[p].as_str());
        if let Some(candidate) = classify_span(&span, prev, span_start == 0, model) {
            out.push(candidate);
        }
    }
}

/// Extract the most frequent entities of the requested kinds.
///
/// Counts group by exact surface text (no alias merging); the result is
/// sorted by count descending with ties broken by first occurrence, and
/// truncated to `limit`. Empty text yields an empty result.
pub fn extract_top_entities(
    text: &str,
    kinds: &HashSet<EntityKind>,
    limit: usize,
    model: &LanguageModel,
) -> Vec<EntityMention> {
    if text.is_empty() || limit == 0 || kinds.is_empty() {
        return vec![];
    }

    let scrubbed = scrub_social_markup(text);
    let mut candidates = Vec::new();
    for sentence in split_sentences(&scrubbed) {
        collect_candidates(&sentence, model, &mut candidates);
    }

    // surface -> (kind at first sight, count, first-seen order)
    let mut grouped: HashMap<String, (EntityKind, u32, usize)> = HashMap::new();
    for (order, candidate) in candidates.into_iter().enumerate() {
        grouped
            .entry(candidate.surface)
            .and_modify(|(_, count, _)| *count += 1)
            .or_insert((candidate.kind, 1, order));
    }

    let mut mentions: Vec<(EntityMention, usize)> = grouped
        .into_iter()
        .filter(|(_, (kind, _, _))| kinds.contains(kind))
        .map(|(surface, (kind, count, order))| {
            (
                EntityMention {
                    text: surface,
                    kind,
                    count,
                },
                order,
            )
        })
        .collect();

    mentions.sort_by(|a, b| b.0.count.cmp(&a.0.count).then(a.1.cmp(&b.1)));
    mentions.truncate(limit);
    mentions.into_iter().map(|(m, _)| m).collect()
}
