//! Line extraction.
//!
//! A line ends at `\n`. `\r` is ordinary whitespace here, so `\r\n` input
//! yields lines that still end in `\r`.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::scan::find_newline;

/// Splits off the first line of `buf`.
///
/// Returns the line without its terminator and the number of bytes
/// consumed, which includes the `\n` when one was found. Empty input gives
/// `(b"", 0)`.
#[must_use]
pub fn next_line(buf: &[u8]) -> (&[u8], usize) {
    match find_newline(buf) {
        Some(i) => (&buf[..i], i + 1),
        None => (buf, buf.len()),
    }
}

/// Like [`next_line`], but the returned line keeps its trailing `\n`.
#[must_use]
pub fn next_raw_line(buf: &[u8]) -> &[u8] {
    let (_, used) = next_line(buf);
    &buf[..used]
}

/// Iterator over the lines of a buffer, terminators stripped.
///
/// Created by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a [u8],
}

/// Iterates the lines of `buf` without their `\n`.
///
/// A trailing segment without `\n` is yielded as the last line; a buffer
/// ending in `\n` does not produce an extra empty line.
#[must_use]
pub fn lines(buf: &[u8]) -> Lines<'_> {
    Lines { rest: buf }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, used) = next_line(self.rest);
        self.rest = &self.rest[used..];
        Some(line)
    }
}

impl FusedIterator for Lines<'_> {}

/// Iterator over the lines of a buffer, each keeping its `\n`.
///
/// Created by [`raw_lines`]. Concatenating every item rebuilds the input.
#[derive(Debug, Clone)]
pub struct RawLines<'a> {
    rest: &'a [u8],
}

/// Iterates the lines of `buf`, each with its trailing `\n` when present.
#[must_use]
pub fn raw_lines(buf: &[u8]) -> RawLines<'_> {
    RawLines { rest: buf }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let line = next_raw_line(self.rest);
        self.rest = &self.rest[line.len()..];
        Some(line)
    }
}

impl FusedIterator for RawLines<'_> {}

/// Collects [`lines`]. Empty input gives zero lines, not one empty line.
#[must_use]
pub fn split_lines(buf: &[u8]) -> Vec<&[u8]> {
    lines(buf).collect()
}

/// Collects [`raw_lines`].
#[must_use]
pub fn split_raw_lines(buf: &[u8]) -> Vec<&[u8]> {
    raw_lines(buf).collect()
}
