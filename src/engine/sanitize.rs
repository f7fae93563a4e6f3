//! Input sanitation.
//!
//! Word-list lines arrive messy: trailing newlines, stray whitespace,
//! mixed case. This stage normalizes each line into the canonical form the
//! rest of the pipeline assumes (lowercase `a-z`, non-empty) or drops it.
//! Later stages never re-check canonical form.

/// Canonicalize one raw line, or return `None` to drop it.
///
/// Strips embedded newlines, lowercases, and trims surrounding
/// whitespace. Anything left empty is dropped, as is anything containing
/// characters outside `a-z` — a word with such a character has no tiling
/// by alphabetic symbols, so it can be rejected before the vocabulary is
/// ever consulted.
pub(crate) fn sanitize(raw: &str) -> Option<String> {
    let collapsed = raw.replace('\n', "").to_lowercase();
    let word = collapsed.trim();

    if word.is_empty() {
        return None;
    }
    if !regex!("^[a-z]+$").is_match(word) {
        return None;
    }

    Some(word.to_string())
}
