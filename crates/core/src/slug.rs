//! Slug normalization and derivation rules.
//!
//! Two distinct rule sets live here: page-path normalization (used by the
//! page resolver before every lookup) and product-slug derivation (used
//! when a product is saved without an explicit slug). Both are idempotent.

/// Normalize a page path for lookup.
///
/// - The root path is always `/` and is never stripped.
/// - Any other path gets a leading `/` if missing and loses a single
///   trailing `/`.
///
/// # Examples
///
/// ```
/// use stylen_core::slug::normalize_slug;
///
/// assert_eq!(normalize_slug("/"), "/");
/// assert_eq!(normalize_slug(""), "/");
/// assert_eq!(normalize_slug("/about/"), "/about");
/// assert_eq!(normalize_slug("about"), "/about");
/// ```
pub fn normalize_slug(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }

    let mut slug = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if slug.len() > 1 && slug.ends_with('/') {
        slug.pop();
    }

    // Stripping one trailing slash can expose the root again ("//" -> "/").
    if slug.is_empty() {
        slug.push('/');
    }
    slug
}

/// Derive a URL-friendly product slug from a display name.
///
/// Lowercases, turns spaces into hyphens, and drops every character that
/// is not alphanumeric, underscore, or hyphen. Applying the function to
/// its own output is a no-op.
///
/// # Examples
///
/// ```
/// use stylen_core::slug::derive_slug;
///
/// assert_eq!(derive_slug("Clear Cast Acrylic Sheet"), "clear-cast-acrylic-sheet");
/// assert_eq!(derive_slug("Matte Black Acrylic Sheet!!"), "matte-black-acrylic-sheet");
/// ```
pub fn derive_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_preserved() {
        assert_eq!(normalize_slug("/"), "/");
    }

    #[test]
    fn empty_path_is_root() {
        assert_eq!(normalize_slug(""), "/");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        assert_eq!(normalize_slug("/about/"), "/about");
    }

    #[test]
    fn leading_slash_is_added() {
        assert_eq!(normalize_slug("dealers-pune"), "/dealers-pune");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["/", "", "/about/", "about", "/a/b/", "//"] {
            let once = normalize_slug(s);
            assert_eq!(normalize_slug(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn double_slash_collapses_to_root() {
        assert_eq!(normalize_slug("//"), "/");
    }

    #[test]
    fn derive_slug_basic() {
        assert_eq!(derive_slug("Gold Mirror Acrylic"), "gold-mirror-acrylic");
    }

    #[test]
    fn derive_slug_strips_punctuation() {
        assert_eq!(
            derive_slug("Matte Black Acrylic Sheet!!"),
            "matte-black-acrylic-sheet"
        );
    }

    #[test]
    fn derive_slug_is_idempotent() {
        for name in [
            "Clear Cast Acrylic Sheet",
            "Ubuntu Foam Board (WPC)",
            "Frosted / Diffuser Acrylic",
            "Matte Black Acrylic Sheet!!",
            "ALL CAPS   name",
        ] {
            let once = derive_slug(name);
            assert_eq!(derive_slug(&once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn derive_slug_keeps_underscores_and_digits() {
        assert_eq!(derive_slug("RC_20 Grade Cork"), "rc_20-grade-cork");
    }
}
