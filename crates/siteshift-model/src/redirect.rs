//! Redirect-need heuristic
//!
//! Decides whether renaming a page during migration requires an HTTP
//! redirect from the old address. The rule is deliberately forgiving about
//! input shape: anything that does not parse as an absolute URL is compared
//! as a plain path string instead of being rejected.

use url::Url;

/// Normalize an input to a comparable path.
///
/// Absolute URLs contribute their path component; anything else is used
/// verbatim. Trailing slashes are insignificant either way.
fn normalize_path(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => parsed.path().trim_end_matches('/').to_string(),
        Err(_) => input.trim_end_matches('/').to_string(),
    }
}

/// Last `/`-separated segment of a normalized path, empty for an empty path.
fn base_segment(path: &str) -> &str {
    path.trim_end_matches('/').split('/').next_back().unwrap_or("")
}

/// Whether moving a page from `original_url` to `migrated_url` requires a
/// redirect.
///
/// Returns `false` exactly when the two normalized paths are equal. Total
/// and pure: malformed URLs degrade to string comparison, never to an
/// error.
#[must_use]
pub fn needs_redirect(original_url: &str, migrated_url: &str) -> bool {
    let original_path = normalize_path(original_url);
    let migrated_path = normalize_path(migrated_url);

    if original_path == migrated_path {
        return false;
    }

    let original_base = base_segment(&original_path);
    let migrated_base = base_segment(&migrated_path);

    // The base-segment comparison cannot flip the verdict here: once the
    // full paths differ, the right-hand operand is already true. Kept so
    // the flag matches every record the rule has produced so far.
    original_base != migrated_base || original_path != migrated_path
}
