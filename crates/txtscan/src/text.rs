//! `&str` counterparts of the byte operations.
//!
//! Every whitespace byte is ASCII, so every boundary the byte operations
//! cut at is also a char boundary and their results stay valid UTF-8. The
//! one exception is [`remove_leading_rect_str`], whose margin is a byte
//! count and can land inside a scalar; it reports that as a
//! [`TextError`].

use alloc::{string::String, vec::Vec};

use bstr::ByteVec;

use crate::{
    DragOptions, TextError, drag_with, linelize, next_line, raw_lines, remove_indent,
    remove_leading_rect, space_swap, tokens, trim_whitespace,
};

/// Re-borrows `part`, a sub-slice of `text` produced by a byte operation,
/// as `&str`.
fn reborrow<'a>(text: &'a str, part: &[u8]) -> &'a str {
    let start = part.as_ptr().addr() - text.as_ptr().addr();
    &text[start..start + part.len()]
}

/// See [`next_line`].
#[must_use]
pub fn next_line_str(text: &str) -> (&str, usize) {
    let (line, used) = next_line(text.as_bytes());
    (reborrow(text, line), used)
}

/// See [`split_lines`](crate::split_lines).
#[must_use]
pub fn split_lines_str(text: &str) -> Vec<&str> {
    raw_lines(text.as_bytes())
        .map(|raw| reborrow(text, raw.strip_suffix(b"\n").unwrap_or(raw)))
        .collect()
}

/// See [`split_raw_lines`](crate::split_raw_lines).
#[must_use]
pub fn split_raw_lines_str(text: &str) -> Vec<&str> {
    raw_lines(text.as_bytes()).map(|raw| reborrow(text, raw)).collect()
}

/// See [`trim_whitespace`]. Unlike [`str::trim`] only the six ASCII
/// whitespace bytes are removed.
#[must_use]
pub fn trim_str(text: &str) -> &str {
    reborrow(text, trim_whitespace(text.as_bytes()))
}

/// See [`tokenize`](crate::tokenize).
#[must_use]
pub fn tokenize_str(text: &str) -> Vec<&str> {
    tokens(text.as_bytes()).map(|tok| reborrow(text, tok)).collect()
}

/// See [`drag_with`].
#[must_use]
pub fn drag_str(text: &str, options: DragOptions) -> (&str, usize) {
    let (block, used) = drag_with(text.as_bytes(), options);
    (reborrow(text, block), used)
}

/// See [`linelize`].
#[must_use]
pub fn linelize_str(text: &str) -> String {
    linelize(text.as_bytes()).into_string_lossy()
}

/// See [`space_swap`].
#[must_use]
pub fn space_swap_str(text: &str, replacement: &str) -> String {
    space_swap(text.as_bytes(), replacement.as_bytes()).into_string_lossy()
}

/// See [`remove_indent`].
#[must_use]
pub fn remove_indent_str(text: &str, level: usize) -> String {
    remove_indent(text.as_bytes(), level).into_string_lossy()
}

/// See [`remove_leading_rect`].
///
/// # Errors
///
/// Returns [`TextError::SplitScalar`] for the first line where cutting
/// `width` bytes would split a multi-byte scalar.
pub fn remove_leading_rect_str(text: &str, width: usize) -> Result<String, TextError> {
    for (line, raw) in raw_lines(text.as_bytes()).enumerate() {
        let body = raw.strip_suffix(b"\n").unwrap_or(raw);
        let offset = body.len().min(width);
        if !reborrow(text, raw).is_char_boundary(offset) {
            return Err(TextError::SplitScalar { line, offset });
        }
    }
    Ok(remove_leading_rect(text.as_bytes(), width).into_string_lossy())
}
