// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split free text into normalized words: whitespace-separated, empties
/// dropped, at most one punctuation character stripped from each end
/// (a single pass, not iterative), case untouched.
///
/// A word that strips down to nothing poisons the whole run: the result
/// is empty, so callers treat the text as unusable rather than work with
/// a gap in the sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for raw in text.split_whitespace() {
        let mut word = raw;
        if let Some(last) = word.chars().next_back() {
            if last.is_ascii_punctuation() {
                word = &word[..word.len() - last.len_utf8()];
            }
        }
        if let Some(first) = word.chars().next() {
            if first.is_ascii_punctuation() {
                word = &word[first.len_utf8()..];
            }
        }
        if word.is_empty() {
            return Vec::new();
        }
        words.push(s!(word));
    }
    words
}
