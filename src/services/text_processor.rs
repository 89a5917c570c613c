// Text Processing Service
// Shared normalization, tokenization and sentence splitting

use regex::Regex;
use std::sync::OnceLock;

fn space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{3000}\u{00A0}]").unwrap())
}

fn ws_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\x0C\x0B]+").unwrap())
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+|www\.\S+").unwrap())
}

fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@\w+").unwrap())
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\p{L}][\p{L}\p{N}'_-]*").unwrap())
}

/// Normalize punctuation and whitespace in captured text.
pub fn normalize_punctuation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_string();

    // Replace smart quotes
    s = s.replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'");

    // Replace em dash and ellipsis
    s = s.replace('\u{2014}', "-").replace('\u{2026}', "...");

    // Replace ideographic space and non-breaking space
    s = space_re().replace_all(&s, " ").to_string();

    // Normalize line endings
    s = s.replace("\r\n", "\n").replace('\r', "\n");

    // Collapse horizontal whitespace
    s = ws_re().replace_all(&s, " ").to_string();

    // Strip each line
    s = s.lines().map(|ln| ln.trim()).collect::<Vec<_>>().join("\n");

    s.trim().to_string()
}

/// Strip feed markup that carries no linguistic signal: URLs and
/// @-mentions are dropped, hashtags keep their bare term.
pub fn scrub_social_markup(text: &str) -> String {
    let s = url_re().replace_all(text, " ");
    let s = mention_re().replace_all(&s, " ");
    let s = s.replace('#', " ");
    ws_re().replace_all(&s, " ").trim().to_string()
}

/// Lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Word tokens with original casing preserved.
pub fn tokenize_cased(text: &str) -> Vec<String> {
    word_re()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Sentence splitting with quote and decimal-number guards.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut buffer = String::new();
    let mut in_quote = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        buffer.push(ch);

        if ch == '"' {
            in_quote = !in_quote;
        }

        let mut is_sentence_end = false;
        if ['.', '!', '?'].contains(&ch) && !in_quote {
            // Don't split decimal numbers like 36.5
            let mid_number = ch == '.'
                && i > 0
                && i + 1 < chars.len()
                && chars[i - 1].is_ascii_digit()
                && chars[i + 1].is_ascii_digit();
            if !mid_number {
                is_sentence_end = true;
            }
        }

        if is_sentence_end {
            // Swallow any run of closing punctuation ("?!", "...")
            while i + 1 < chars.len() && ['.', '!', '?'].contains(&chars[i + 1]) {
                i += 1;
                buffer.push(chars[i]);
            }
            let sentence = buffer.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            buffer.clear();
        }

        i += 1;
    }

    let remaining = buffer.trim().to_string();
    if !remaining.is_empty() {
        sentences.push(remaining);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_punctuation() {
        let input = "Hello\u{201c}World\u{201d} \u{2014} ok";
        assert_eq!(normalize_punctuation(input), "Hello\"World\" - ok");
    }

    #[test]
    fn test_scrub_social_markup() {
        let input = "big news https://t.co/abc from @someone about #economy";
        assert_eq!(scrub_social_markup(input), "big news from about economy");
    }

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("The Market"), vec!["the", "market"]);
    }

    #[test]
    fn test_split_sentences_decimal_guard() {
        let text = "The rate hit 36.5 today. Markets reacted.";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "The rate hit 36.5 today.");
    }

    #[test]
    fn test_split_sentences_run_of_terminators() {
        let sentences = split_sentences("Really?! Yes... maybe");
        assert_eq!(sentences, vec!["Really?!", "Yes...", "maybe"]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
    }
}
