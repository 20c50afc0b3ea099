//! Case- and accent-insensitive text folding used by every text constraint.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold `text` into its comparison form.
///
/// The result is trimmed, canonically decomposed (NFD) with combining marks dropped, and
/// lowercased, so `"Córdoba"`, `"CORDOBA"` and `" cordoba "` all fold to `"cordoba"`.
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if `needle` occurs in `haystack` after both are folded with [`normalize`].
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
