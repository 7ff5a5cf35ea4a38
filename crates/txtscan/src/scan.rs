//! Prefix scanners built on the byte classifier.
//!
//! All counts are byte counts and all scanners are total: the empty buffer
//! yields `0`.

use bstr::ByteSlice;

use crate::classify::{is_indent_byte, is_whitespace};

/// Length of the longest prefix of `buf` made only of whitespace bytes.
#[must_use]
pub fn count_leading_whitespace(buf: &[u8]) -> usize {
    buf.iter().position(|&b| !is_whitespace(b)).unwrap_or(buf.len())
}

/// Length of the longest prefix of `buf` containing no whitespace byte.
#[must_use]
pub fn count_leading_non_whitespace(buf: &[u8]) -> usize {
    buf.iter().position(|&b| is_whitespace(b)).unwrap_or(buf.len())
}

/// Length of the longest prefix of `buf` made only of spaces and tabs.
///
/// Unlike [`count_leading_whitespace`] this stops at line breaks, so it
/// measures the indentation of a single line.
#[must_use]
pub fn count_leading_indent_spaces(buf: &[u8]) -> usize {
    buf.iter().position(|&b| !is_indent_byte(b)).unwrap_or(buf.len())
}

/// Byte index of the first `\n` in `buf`, if any.
#[inline]
#[must_use]
pub fn find_newline(buf: &[u8]) -> Option<usize> {
    buf.find_byte(b'\n')
}

/// Number of maximal whitespace runs in `buf`.
///
/// A run spanning several lines counts once. This is the counting pass
/// [`space_swap`](crate::space_swap) sizes its output with.
#[must_use]
pub fn count_whitespace_runs(buf: &[u8]) -> usize {
    let mut runs = 0;
    let mut i = 0;
    while i < buf.len() {
        if is_whitespace(buf[i]) {
            i += count_leading_whitespace(&buf[i..]);
            runs += 1;
        } else {
            i += count_leading_non_whitespace(&buf[i..]);
        }
    }
    runs
}
