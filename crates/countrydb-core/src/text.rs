// crates/countrydb-core/src/text.rs

/// Lowercases a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so `"BRASÍLIA"` folds to `"brasília"`.
/// Accents are kept: `"brasilia"` does not match `"Brasília"`.
pub fn fold_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test. An empty needle is always contained.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold_lower(haystack).contains(&fold_lower(needle))
}
