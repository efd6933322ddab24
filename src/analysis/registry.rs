//! Named table of base pattern fragments.
//!
//! The registry is seeded from [`BASE_SOURCES`] and can be extended at runtime
//! with [`PatternRegistry::register`], which is how a caller-supplied custom
//! punctuation set gets into the normalization pipeline. Every
//! [`WordExtractor`](crate::analysis::word_extractor::WordExtractor) owns its
//! own registry, so registering a fragment never leaks into other extractors.

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::analysis::pattern::{PatternFlags, PatternValue};
use crate::error::{Result, SpellbridgeError};

/// Names of the base fragments.
pub mod names {
    /// Whitespace, including the no-break space.
    pub const SPACE: &str = "space";
    /// A literal dot.
    pub const DOT: &str = "dot";
    /// ASCII digits.
    pub const DIGITS: &str = "digits";
    /// The no-break space (U+00A0) on its own.
    pub const HTML_NBSP: &str = "html_nbsp";
    /// Characters that always separate words.
    pub const TEXT_PUNCTUATION: &str = "text_punctuation";
    /// `.`, `-` and `'`: separators only when repeated or at a word edge.
    pub const SITUATIONAL_SEPARATORS: &str = "situational_separators";
    /// Line terminators.
    pub const END_OF_LINE: &str = "end_of_line";
    /// Zero-width space and byte order mark.
    pub const SPECIAL_CHARACTERS: &str = "special_characters";
    /// The `{2,}` quantifier.
    pub const REPEATED_TWO_PLUS: &str = "repeated_two_plus";
    /// Anything that ends a word once normalization is done.
    pub const BOUNDARY_SPACE: &str = "boundary_space";
    /// Separators supplied through configuration. Not part of the base table.
    pub const CUSTOM_PUNCTUATION: &str = "custom_punctuation";
}

/// Source table the base registry is seeded from.
///
/// Sources use `regex` crate syntax. The punctuation class covers ASCII
/// punctuation (apart from the situational separators), the Arabic question
/// mark, comma and semicolon, C0 controls, the Latin-1 punctuation block, the
/// general punctuation and symbol ranges (U+2000..U+266F, except the zero-width
/// space) and the supplemental punctuation block.
pub const BASE_SOURCES: &[(&str, &str)] = &[
    (names::SPACE, r"[\s\x{A0}]"),
    (names::DOT, r"\."),
    (names::DIGITS, r"[0-9]"),
    (names::HTML_NBSP, r"\x{A0}"),
    (
        names::TEXT_PUNCTUATION,
        concat!(
            r#" ,"\^\$\*\+\?=!:\|\\/\(\)\[\]\{\}><@%\&\#;_\~"#,
            r"\x{061F}\x{060C}\x{061B}",
            r"\x{01}-\x{1F}\x{80}-\x{B6}\x{B8}-\x{BF}",
            r"\x{2000}-\x{200A}\x{200C}-\x{266F}\x{2E00}-\x{2E7F}",
        ),
    ),
    (names::SITUATIONAL_SEPARATORS, r"\.\-'"),
    (names::END_OF_LINE, r"[\r\n]"),
    (names::SPECIAL_CHARACTERS, r"[\x{200B}\x{FEFF}]"),
    (names::REPEATED_TWO_PLUS, r"{2,}"),
    (names::BOUNDARY_SPACE, r"[\s\x{A0}\x{200B}\x{FEFF}]"),
];

lazy_static! {
    static ref BASE_REGISTRY: PatternRegistry = {
        let mut registry = PatternRegistry::new();
        registry.seed(BASE_SOURCES.iter().copied());
        registry
    };
}

/// A mapping from fragment name to [`PatternValue`].
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    fragments: AHashMap<String, PatternValue>,
}

impl PatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        PatternRegistry {
            fragments: AHashMap::new(),
        }
    }

    /// Create a registry holding the base fragments.
    pub fn with_base_fragments() -> Self {
        BASE_REGISTRY.clone()
    }

    /// Add one fragment per `(name, source)` entry, with empty flags.
    pub fn seed<'a, I>(&mut self, table: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, source) in table {
            self.register(name, source);
        }
    }

    /// Add or overwrite a fragment and return it.
    pub fn register(&mut self, name: &str, source: &str) -> PatternValue {
        self.register_with_flags(name, source, PatternFlags::empty())
    }

    /// Add or overwrite a fragment with the given flags and return it.
    pub fn register_with_flags(
        &mut self,
        name: &str,
        source: &str,
        flags: PatternFlags,
    ) -> PatternValue {
        let fragment = PatternValue::new(name, source).with_flag_set(flags);
        self.fragments.insert(name.to_string(), fragment.clone());
        fragment
    }

    /// Remove a fragment, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<PatternValue> {
        self.fragments.remove(name)
    }

    /// Look up a fragment.
    pub fn get(&self, name: &str) -> Result<&PatternValue> {
        self.fragments
            .get(name)
            .ok_or_else(|| SpellbridgeError::unknown_fragment(name))
    }

    /// Check whether a fragment is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Names of all registered fragments, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.fragments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_fragments_are_defined() {
        let registry = PatternRegistry::with_base_fragments();

        assert_eq!(registry.len(), BASE_SOURCES.len());
        for (name, source) in BASE_SOURCES {
            let fragment = registry.get(name).unwrap();
            assert_eq!(fragment.source(), *source);
            assert!(fragment.flags().is_empty());
        }
    }

    #[test]
    fn test_base_fragments_compile() {
        let registry = PatternRegistry::with_base_fragments();

        for name in registry.names() {
            if name == names::REPEATED_TWO_PLUS {
                continue; // a bare quantifier
            }
            let fragment = registry.get(name).unwrap();
            assert!(fragment.regex().is_ok(), "{name} should compile");
        }

        let punctuation = registry
            .get(names::TEXT_PUNCTUATION)
            .unwrap()
            .as_character_set();
        assert!(punctuation.regex().is_ok());
    }

    #[test]
    fn test_punctuation_class_members() {
        let registry = PatternRegistry::with_base_fragments();
        let punctuation = registry
            .get(names::TEXT_PUNCTUATION)
            .unwrap()
            .as_character_set();

        for c in [
            ',', '"', '_', '#', '<', '>', '[', ']', '\\', '\t', '\u{061F}', '\u{2014}',
        ] {
            let bound = punctuation.with_bound_text(c.to_string());
            assert!(bound.is_match().unwrap(), "{c:?} should be punctuation");
        }
        for c in ['a', '.', '-', '\'', '7', '\u{200B}', 'é'] {
            let bound = punctuation.with_bound_text(c.to_string());
            assert!(!bound.is_match().unwrap(), "{c:?} should not be punctuation");
        }
    }

    #[test]
    fn test_get_unknown_fragment() {
        let registry = PatternRegistry::with_base_fragments();
        match registry.get("nope").unwrap_err() {
            SpellbridgeError::UnknownFragment(name) => assert_eq!(name, "nope"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_register_overwrites_and_is_local() {
        let mut registry = PatternRegistry::with_base_fragments();
        let fragment = registry.register(names::CUSTOM_PUNCTUATION, "x");
        assert_eq!(fragment.name(), names::CUSTOM_PUNCTUATION);

        registry.register_with_flags(names::CUSTOM_PUNCTUATION, "y", PatternFlags::GLOBAL);
        let fragment = registry.get(names::CUSTOM_PUNCTUATION).unwrap();
        assert_eq!(fragment.source(), "y");
        assert_eq!(fragment.flags(), PatternFlags::GLOBAL);

        // The base table is untouched.
        assert!(!PatternRegistry::with_base_fragments().contains(names::CUSTOM_PUNCTUATION));

        assert!(registry.unregister(names::CUSTOM_PUNCTUATION).is_some());
        assert!(!registry.contains(names::CUSTOM_PUNCTUATION));
    }

    #[test]
    fn test_seed_empty_registry() {
        let mut registry = PatternRegistry::new();
        assert!(registry.is_empty());

        registry.seed([("a", "a"), ("b", "b")]);
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
