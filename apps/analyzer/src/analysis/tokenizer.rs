use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Distinct lowercase word tokens, iterated in lexicographic order.
pub type TokenSet = BTreeSet<String>;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// Lowercases `text` and collects every maximal run of `[A-Za-z0-9_]`.
/// Empty or wordless input yields an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}
