//! Composable regular-expression fragments.
//!
//! A [`PatternValue`] is a regex kept as data: a name, the regex source text,
//! a set of [`PatternFlags`] and optionally a bound input string. Fragments are
//! combined structurally (sequence, alternation, character sets, anchors) and
//! only compiled when a terminal operation (split, replace, match test) runs
//! against the bound text.
//!
//! Every operation returns a new value; a fragment never changes after it has
//! been created.
//!
//! # Examples
//!
//! ```
//! use spellbridge::analysis::pattern::{Grouping, PatternValue};
//!
//! let separators = PatternValue::new("situational", r"\.\-'")
//!     .as_character_set()
//!     .global();
//! let runs = separators.sequence(&PatternValue::new("two_plus", "{2,}"), Grouping::Raw);
//!
//! assert_eq!(runs.source(), r"[\.\-']{2,}");
//! assert_eq!(runs.name(), "situational&two_plus");
//!
//! let text = runs
//!     .with_bound_text("one...two")
//!     .wrap_occurrences_with("#")
//!     .unwrap();
//! assert_eq!(text.text(), "one#...#two");
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use bitflags::bitflags;
use regex::{Captures, Regex, RegexBuilder, Replacer};

use crate::error::{Result, SpellbridgeError};

bitflags! {
    /// Matching flags of a fragment.
    ///
    /// `GLOBAL` does not change the compiled regex; it selects between
    /// replacing every match and replacing only the first one.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PatternFlags: u8 {
        /// `g`: replace every match.
        const GLOBAL = 0b0001;
        /// `i`: case-insensitive matching.
        const IGNORE_CASE = 0b0010;
        /// `m`: `^`/`$` match at line boundaries.
        const MULTI_LINE = 0b0100;
        /// `s`: `.` matches `\n`.
        const DOT_ALL = 0b1000;
    }
}

impl PatternFlags {
    /// Parse a single flag character (`g`, `i`, `m` or `s`).
    pub fn from_flag_char(flag: char) -> Option<Self> {
        match flag {
            'g' => Some(PatternFlags::GLOBAL),
            'i' => Some(PatternFlags::IGNORE_CASE),
            'm' => Some(PatternFlags::MULTI_LINE),
            's' => Some(PatternFlags::DOT_ALL),
            _ => None,
        }
    }

    /// Render the flags as their characters, in `gims` order.
    pub fn as_flag_chars(&self) -> String {
        [
            (PatternFlags::GLOBAL, 'g'),
            (PatternFlags::IGNORE_CASE, 'i'),
            (PatternFlags::MULTI_LINE, 'm'),
            (PatternFlags::DOT_ALL, 's'),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, c)| *c)
        .collect()
    }

    fn compile_relevant(self) -> Self {
        self.difference(PatternFlags::GLOBAL)
    }
}

/// How a combinator treats its operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Wrap each operand in `(?:...)` so alternations keep their meaning.
    #[default]
    NonCapturing,
    /// Concatenate the sources as they are. Needed when the right operand is
    /// a bare quantifier or when the result becomes a character set.
    Raw,
}

/// An immutable, composable regular-expression fragment.
#[derive(Clone)]
pub struct PatternValue {
    name: Arc<str>,
    source: String,
    flags: PatternFlags,
    bound_text: Option<String>,
    compiled: OnceLock<Regex>,
}

impl PatternValue {
    /// Create a new fragment with empty flags and no bound text.
    pub fn new(name: impl AsRef<str>, source: impl Into<String>) -> Self {
        PatternValue {
            name: Arc::from(name.as_ref()),
            source: source.into(),
            flags: PatternFlags::empty(),
            bound_text: None,
            compiled: OnceLock::new(),
        }
    }

    /// Get the fragment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the regex source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the flags.
    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Get the bound text, if any.
    pub fn bound_text(&self) -> Option<&str> {
        self.bound_text.as_deref()
    }

    /// Get the bound text, or an empty string when nothing is bound.
    pub fn text(&self) -> &str {
        self.bound_text.as_deref().unwrap_or("")
    }

    /// Consume the fragment and return its bound text.
    pub fn into_text(self) -> String {
        self.bound_text.unwrap_or_default()
    }

    /// Return a clone bound to `text`.
    pub fn with_bound_text(&self, text: impl Into<String>) -> Self {
        PatternValue {
            name: Arc::clone(&self.name),
            source: self.source.clone(),
            flags: self.flags,
            bound_text: Some(text.into()),
            compiled: self.compiled.clone(),
        }
    }

    /// Return a clone with a different name.
    pub fn with_name(&self, name: impl AsRef<str>) -> Self {
        PatternValue {
            name: Arc::from(name.as_ref()),
            ..self.clone()
        }
    }

    /// Return a clone with exactly `flags`.
    pub fn with_flag_set(&self, flags: PatternFlags) -> Self {
        let compiled = if flags.compile_relevant() == self.flags.compile_relevant() {
            self.compiled.clone()
        } else {
            OnceLock::new()
        };

        PatternValue {
            name: Arc::clone(&self.name),
            source: self.source.clone(),
            flags,
            bound_text: self.bound_text.clone(),
            compiled,
        }
    }

    /// Add flag characters; flags that are already present are left alone.
    pub fn with_flags(&self, flag_chars: &str) -> Result<Self> {
        let mut flags = self.flags;
        for c in flag_chars.chars() {
            let flag =
                PatternFlags::from_flag_char(c).ok_or_else(|| SpellbridgeError::InvalidFlag {
                    name: self.name.to_string(),
                    flag: c,
                })?;
            flags |= flag;
        }

        Ok(self.with_flag_set(flags))
    }

    /// Add the `g` flag.
    pub fn global(&self) -> Self {
        self.with_flag_set(self.flags | PatternFlags::GLOBAL)
    }

    /// Add the `i` flag.
    pub fn ignore_case(&self) -> Self {
        self.with_flag_set(self.flags | PatternFlags::IGNORE_CASE)
    }

    fn with_source(&self, source: String) -> Self {
        PatternValue {
            name: Arc::clone(&self.name),
            source,
            flags: self.flags,
            bound_text: self.bound_text.clone(),
            compiled: OnceLock::new(),
        }
    }

    /// Turn the source into a character set: `[source]`.
    ///
    /// Unescaped `[` and `]` inside the fragment are dropped first, so
    /// fragments that already are sets (or unions of sets) merge into one
    /// set. The remaining source must be valid inside a character class.
    pub fn as_character_set(&self) -> Self {
        self.with_source(format!("[{}]", strip_set_brackets(&self.source)))
    }

    /// Wrap the source in a capturing group: `(source)`.
    pub fn as_group(&self) -> Self {
        self.with_source(format!("({})", self.source))
    }

    /// Anchor at the start of the input: `^source`.
    pub fn anchor_start(&self) -> Self {
        self.with_source(format!("^{}", self.source))
    }

    /// Anchor at the end of the input: `source$`.
    pub fn anchor_end(&self) -> Self {
        self.with_source(format!("{}$", self.source))
    }

    /// Append a quantifier such as `+`, `*` or `{2,}`.
    pub fn quantify(&self, quantifier: &str) -> Self {
        self.with_source(format!("{}{}", self.source, quantifier))
    }

    /// Match the fragment one or more times.
    pub fn one_or_more(&self) -> Self {
        self.quantify("+")
    }

    fn combine(
        &self,
        other: &PatternValue,
        separator: &str,
        name_separator: &str,
        grouping: Grouping,
    ) -> Self {
        let source = match grouping {
            Grouping::NonCapturing => {
                format!("(?:{}){separator}(?:{})", self.source, other.source)
            }
            Grouping::Raw => format!("{}{separator}{}", self.source, other.source),
        };

        PatternValue {
            name: Arc::from(format!("{}{name_separator}{}", self.name, other.name)),
            source,
            flags: self.flags | other.flags,
            bound_text: self.bound_text.clone(),
            compiled: OnceLock::new(),
        }
    }

    /// Concatenate `other` after this fragment. The result is named `self&other`.
    pub fn sequence(&self, other: &PatternValue, grouping: Grouping) -> Self {
        self.combine(other, "", "&", grouping)
    }

    /// Alternation of this fragment and `other`. The result is named `self|other`.
    pub fn either(&self, other: &PatternValue, grouping: Grouping) -> Self {
        self.combine(other, "|", "|", grouping)
    }

    /// Sequence every fragment of `fragments` after this one, left to right.
    pub fn compose_all(&self, fragments: &[PatternValue], grouping: Grouping) -> Self {
        fragments
            .iter()
            .fold(self.clone(), |acc, fragment| acc.sequence(fragment, grouping))
    }

    /// Get the compiled regex, compiling it on first use.
    pub fn regex(&self) -> Result<&Regex> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }

        let regex = RegexBuilder::new(&self.source)
            .case_insensitive(self.flags.contains(PatternFlags::IGNORE_CASE))
            .multi_line(self.flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(self.flags.contains(PatternFlags::DOT_ALL))
            .build()
            .map_err(|e| SpellbridgeError::invalid_fragment(self.name.as_ref(), e.to_string()))?;

        Ok(self.compiled.get_or_init(|| regex))
    }

    /// Whether the regex has already been compiled for this value.
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Split the bound text on this fragment.
    pub fn split(&self) -> Result<Vec<&str>> {
        Ok(self.regex()?.split(self.text()).collect())
    }

    /// Test whether the fragment matches anywhere in the bound text.
    pub fn is_match(&self) -> Result<bool> {
        Ok(self.regex()?.is_match(self.text()))
    }

    /// Collect every match in the bound text.
    pub fn find_all(&self) -> Result<Vec<&str>> {
        Ok(self
            .regex()?
            .find_iter(self.text())
            .map(|m| m.as_str())
            .collect())
    }

    /// Replace matches in the bound text and return a clone holding the result.
    ///
    /// Every match is replaced when the `g` flag is set, only the first one
    /// otherwise. `replacer` is anything `regex` accepts: a template string
    /// (`$1`, `${name}`) or a closure over the captures.
    pub fn replace<R: Replacer>(&self, replacer: R) -> Result<Self> {
        let regex = self.regex()?;
        let text = self.text();
        let replaced = if self.flags.contains(PatternFlags::GLOBAL) {
            regex.replace_all(text, replacer)
        } else {
            regex.replace(text, replacer)
        };

        Ok(self.with_bound_text(replaced.into_owned()))
    }

    /// Prefix the source with `wrap`: `wrap + source`. `wrap` is regex source.
    pub fn wrapped_left(&self, wrap: &str) -> Self {
        self.with_source(format!("{wrap}{}", self.source))
    }

    /// Suffix the source with `wrap`: `source + wrap`. `wrap` is regex source.
    pub fn wrapped_right(&self, wrap: &str) -> Self {
        self.with_source(format!("{}{wrap}", self.source))
    }

    /// Replace `wrap` followed by this fragment. `wrap` is regex source.
    ///
    /// The wrapped source only exists for this replacement; the returned
    /// clone keeps the original source. The wrapped regex is compiled on
    /// every call, so hot paths should build it once with
    /// [`wrapped_left`](Self::wrapped_left) and call [`replace`](Self::replace).
    pub fn replace_wrapped_left<R: Replacer>(&self, wrap: &str, replacer: R) -> Result<Self> {
        let replaced = self.wrapped_left(wrap).replace(replacer)?;

        Ok(self.with_bound_text(replaced.into_text()))
    }

    /// Replace this fragment followed by `wrap`. `wrap` is regex source.
    pub fn replace_wrapped_right<R: Replacer>(&self, wrap: &str, replacer: R) -> Result<Self> {
        let replaced = self.wrapped_right(wrap).replace(replacer)?;

        Ok(self.with_bound_text(replaced.into_text()))
    }

    /// Surround matches in the bound text with the literal `wrap`.
    pub fn wrap_occurrences_with(&self, wrap: &str) -> Result<Self> {
        self.replace(|caps: &Captures| format!("{wrap}{}{wrap}", &caps[0]))
    }
}

/// Remove `[` and `]` that are not escaped.
fn strip_set_brackets(source: &str) -> String {
    let mut stripped = String::with_capacity(source.len());
    let mut escaped = false;

    for c in source.chars() {
        if escaped {
            stripped.push(c);
            escaped = false;
            continue;
        }
        match c {
            '\\' => {
                stripped.push(c);
                escaped = true;
            }
            '[' | ']' => {}
            _ => stripped.push(c),
        }
    }

    stripped
}

impl fmt::Debug for PatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternValue")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("flags", &self.flags.as_flag_chars())
            .field("bound_text", &self.bound_text)
            .finish()
    }
}

impl fmt::Display for PatternValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags.as_flag_chars())
    }
}

impl PartialEq for PatternValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.source == other.source
            && self.flags == other.flags
            && self.bound_text == other.bound_text
    }
}

impl Eq for PatternValue {}

/// Sequence `fragments` left to right, starting from the first one.
///
/// Fails with `InvalidFragment` when `fragments` is empty.
pub fn compose(fragments: &[PatternValue], grouping: Grouping) -> Result<PatternValue> {
    let (first, rest) = fragments
        .split_first()
        .ok_or_else(|| SpellbridgeError::invalid_fragment("composition", "nothing to compose"))?;

    Ok(first.compose_all(rest, grouping))
}
