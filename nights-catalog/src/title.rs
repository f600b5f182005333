//! Title normalization and slug generation.
//!
//! Cinema chains spell the same film in different ways ("Tala2ni",
//! "TALAANI", "Avatar: Fire and Ash"). Matching is done on a canonical form
//! that ignores case, punctuation, and spacing.

/// Normalize a movie title into its comparable form.
///
/// Lowercases, drops every character that is not an ASCII letter, digit, or
/// whitespace, collapses whitespace runs to a single space, and trims.
/// Total and idempotent; the empty string maps to itself.
///
/// # Examples
///
/// ```
/// use nights_catalog::title::normalize_title;
///
/// assert_eq!(normalize_title("Avatar: Fire and Ash"), "avatar fire and ash");
/// assert_eq!(normalize_title("  Tala2ni!  "), "tala2ni");
/// assert_eq!(normalize_title("Spider-Man"), "spiderman");
/// assert_eq!(normalize_title(""), "");
/// ```
pub fn normalize_title(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let mut result = String::with_capacity(kept.len());
    for word in kept.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Reduce text to a lowercase, hyphen-separated slug.
///
/// ASCII alphanumerics are kept (lowercased); every run of anything else
/// becomes a single `-`, with none leading or trailing.
///
/// # Examples
///
/// ```
/// use nights_catalog::title::slugify;
///
/// assert_eq!(slugify("VOX Cinemas"), "vox-cinemas");
/// assert_eq!(slugify("  Cineco "), "cineco");
/// assert_eq!(slugify("Zootropolis 2: The Return"), "zootropolis-2-the-return");
/// ```
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    // Trim trailing separator
    if result.ends_with('-') {
        result.pop();
    }

    result
}
