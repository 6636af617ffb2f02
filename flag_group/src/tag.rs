//! Raw structural annotations recorded for a field.
//!
//! The derive macro flattens every `#[flag(...)]` attribute on a field into an
//! ordered list of `(key, value)` pairs and stores it in a static slice. The
//! scan reads naming keys from it and the conversion layer reads coercion keys
//! such as `base` and `separator`.

use std::fmt;

/// Annotation data attached to a single field.
///
/// Lookups return the first matching entry, so a key repeated across several
/// attributes resolves to its earliest declaration.
///
/// # Examples
///
/// ```
/// use flag_group::Tag;
///
/// let tag = Tag::new(&[("long", "verbose"), ("short", "v")]);
/// assert_eq!(tag.get("long"), "verbose");
/// assert_eq!(tag.get("description"), "");
/// assert_eq!(tag.lookup("short"), Some("v"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Tag {
    entries: &'static [(&'static str, &'static str)],
}

impl Tag {
    /// Wraps a static list of `(key, value)` pairs.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Returns the value recorded for `key`, or `""` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> &'static str {
        self.lookup(key).unwrap_or_default()
    }

    /// Returns the value recorded for `key` if the key is present at all.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| *value)
    }

    /// Returns `true` when `key` is present with a non-empty value.
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Iterates over every recorded entry in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns `true` when no annotation was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TAG: Tag = Tag::new(&[
        ("long", "name"),
        ("optional", ""),
        ("separator", ","),
        ("long", "ignored"),
    ]);

    #[rstest]
    #[case("long", "name")]
    #[case("separator", ",")]
    #[case("optional", "")]
    #[case("short", "")]
    fn get_returns_first_value_or_empty(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(TAG.get(key), expected);
    }

    #[rstest]
    fn lookup_distinguishes_empty_from_absent() {
        assert_eq!(TAG.lookup("optional"), Some(""));
        assert_eq!(TAG.lookup("short"), None);
        assert!(!TAG.is_set("optional"));
        assert!(TAG.is_set("separator"));
    }

    #[rstest]
    fn default_tag_is_empty() {
        let tag = Tag::default();
        assert!(tag.is_empty());
        assert_eq!(tag.iter().count(), 0);
    }
}
