use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

// Anything that is not a word character, whitespace or an apostrophe
static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s']").unwrap());

/// Lowercases `sentence`, strips punctuation other than apostrophes and
/// returns the distinct whitespace-separated tokens in first-seen order.
///
/// "Let's try, let's go!" -> ["let's", "try", "go"]
pub fn tokenize(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    STRIP_RE
        .replace_all(&lowered, "")
        .split_whitespace()
        .unique()
        .map(str::to_string)
        .collect()
}
