//! Left-margin removal.

use alloc::vec::Vec;

use crate::scan::{count_leading_indent_spaces, find_newline};

/// Removes `level` bytes of indentation from every line that has at least
/// that many leading spaces or tabs.
///
/// Lines indented less than `level` are copied verbatim, including the
/// indentation they do have.
///
/// ```rust
/// use txtscan::remove_indent;
///
/// assert_eq!(remove_indent(b"   hola\n   hey\nhi", 2), b" hola\n hey\nhi");
/// ```
#[must_use]
pub fn remove_indent(buf: &[u8], level: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut start = 0;

    while start < buf.len() {
        let line = &buf[start..];
        let end = find_newline(line).map_or(line.len(), |i| i + 1);
        let cut = if count_leading_indent_spaces(line) >= level { level } else { 0 };
        out.extend_from_slice(&line[cut..end]);
        start += end;
    }

    out
}

/// Removes a fixed margin of up to `width` bytes from the start of every
/// line, whatever those bytes are.
///
/// The cut never crosses a line break: a line shorter than `width` keeps
/// only its `\n`.
///
/// ```rust
/// use txtscan::remove_leading_rect;
///
/// assert_eq!(remove_leading_rect(b"> a\n>\n> b", 2), b"a\n\nb");
/// ```
#[must_use]
pub fn remove_leading_rect(buf: &[u8], width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut start = 0;

    while start < buf.len() {
        let line = &buf[start..];
        let (body, end) = match find_newline(line) {
            Some(i) => (i, i + 1),
            None => (line.len(), line.len()),
        };
        out.extend_from_slice(&line[body.min(width)..end]);
        start += end;
    }

    out
}
