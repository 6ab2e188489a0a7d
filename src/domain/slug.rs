//! Alias name normalization
//!
//! Names typed on the command line are folded into shell-safe slugs before
//! they reach the store: `"My Alias!"` becomes `my_alias`.

/// Separator used between words of a slug
pub const SEPARATOR: char = '_';

/// Normalizes a raw alias name into a shell-safe slug
///
/// Non-ASCII text is transliterated first, so `café` reads as `cafe`. ASCII
/// letters are lowercased and kept along with digits. Quote characters are
/// dropped so `don't` reads as `dont`. Every other run of characters
/// collapses to a single [`SEPARATOR`], and separators at either end are
/// stripped. The result may be empty.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in deunicode::deunicode(raw).chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if matches!(c, '\'' | '"' | '`') {
            continue;
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Returns true if `name` is already a valid slug
pub fn is_slug(name: &str) -> bool {
    !name.is_empty() && slugify(name) == name
}
