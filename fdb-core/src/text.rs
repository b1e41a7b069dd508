/// Splits a text at whitespace without touching any punctuation.
pub fn split_text_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
