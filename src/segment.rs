use std::sync::OnceLock;

use regex::Regex;

use crate::models::SentenceItem;

const SENTENCE_PATTERN: &str = r"[^.!?]+[.!?]+";

fn sentence_regex() -> &'static Regex {
    static SENTENCE_RE: OnceLock<Regex> = OnceLock::new();
    SENTENCE_RE.get_or_init(|| Regex::new(SENTENCE_PATTERN).expect("sentence pattern is valid"))
}

// Trailing text without terminal punctuation is dropped.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let flattened = flatten_line_breaks(text);
    sentence_regex()
        .find_iter(&flattened)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

pub fn numbered_sentences(text: &str) -> Vec<SentenceItem> {
    split_into_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(idx, text)| SentenceItem { num: idx + 1, text })
        .collect()
}

fn flatten_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\r', '\n'], " ")
}
