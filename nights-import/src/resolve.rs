//! Cinema membership resolution by loose title matching.
//!
//! A listing belongs to a cinema when its normalized title equals, contains,
//! or is contained in one of the cinema's normalized titles. The substring
//! fallback absorbs spelling variants ("Avatar" vs "Avatar: Fire and Ash")
//! and accepts the occasional false positive on short titles.

use nights_catalog::normalize_title;

/// Whether a cinema's title list contains `normalized_title`.
///
/// `normalized_title` must already be normalized and must not be empty: an
/// empty title is a substring of everything. Cinema titles are normalized on
/// every call.
pub fn is_listed(normalized_title: &str, cinema_titles: &[String]) -> bool {
    let normalized: Vec<String> = cinema_titles.iter().map(|t| normalize_title(t)).collect();

    if normalized.iter().any(|t| t == normalized_title) {
        return true;
    }

    normalized
        .iter()
        .any(|t| t.contains(normalized_title) || normalized_title.contains(t.as_str()))
}
