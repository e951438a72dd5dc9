use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a Unicode letter, number, or whitespace.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("punctuation pattern compiles"));

/// Canonical comparison form: lowercased, punctuation and symbols stripped,
/// whitespace runs collapsed to a single ASCII space with no padding.
pub fn normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = PUNCTUATION.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
