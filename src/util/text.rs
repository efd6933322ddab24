//! Byte-offset string editing.
//!
//! Offsets follow [`WordOffset`](crate::analysis::word_extractor::WordOffset):
//! they are UTF-8 byte offsets and must fall on `char` boundaries.

use crate::error::{Result, SpellbridgeError};

/// Replace `text[from..to]` with `insert`.
///
/// # Examples
///
/// ```
/// use spellbridge::util::text::replace_from_to;
///
/// assert_eq!(replace_from_to("a tset here", 2, 6, "test").unwrap(), "a test here");
/// ```
pub fn replace_from_to(text: &str, from: usize, to: usize, insert: &str) -> Result<String> {
    if from > to {
        return Err(SpellbridgeError::invalid_argument(format!(
            "range start {from} is after range end {to}"
        )));
    }
    check_boundary(text, from)?;
    check_boundary(text, to)?;

    let mut edited = String::with_capacity(text.len() - (to - from) + insert.len());
    edited.push_str(&text[..from]);
    edited.push_str(insert);
    edited.push_str(&text[to..]);
    Ok(edited)
}

/// Remove `len` bytes from `start` and put `insert` in their place.
pub fn splice(text: &str, start: usize, len: usize, insert: &str) -> Result<String> {
    let end = start.checked_add(len).ok_or_else(|| {
        SpellbridgeError::invalid_argument(format!("splice length {len} overflows"))
    })?;
    replace_from_to(text, start, end, insert)
}

fn check_boundary(text: &str, offset: usize) -> Result<()> {
    if offset > text.len() {
        return Err(SpellbridgeError::invalid_argument(format!(
            "offset {offset} is past the end of a {}-byte text",
            text.len()
        )));
    }
    if !text.is_char_boundary(offset) {
        return Err(SpellbridgeError::invalid_argument(format!(
            "offset {offset} is not on a character boundary"
        )));
    }
    Ok(())
}
