//! Whitespace-collapsing transforms.
//!
//! Both transforms allocate their output once, with a capacity computed
//! before the pass, and never grow it.

use alloc::vec::Vec;

use crate::{
    classify::is_whitespace,
    lines::lines,
    scan::{count_leading_non_whitespace, count_leading_whitespace, count_whitespace_runs},
    trim::trim_whitespace,
};

/// Joins the non-blank lines of `buf` into one line.
///
/// Each line is trimmed on both sides; lines left empty are dropped and the
/// rest are joined with a single space. Whitespace inside a line is kept
/// as is. Blank or empty input gives an empty buffer.
///
/// ```rust
/// use txtscan::linelize;
///
/// assert_eq!(linelize(b"line\t\x0B\nline\n++"), b"line line ++");
/// ```
#[must_use]
pub fn linelize(buf: &[u8]) -> Vec<u8> {
    // Every separator written replaces at least one `\n`.
    let mut out = Vec::with_capacity(buf.len());

    for line in lines(buf).map(trim_whitespace) {
        if line.is_empty() {
            continue;
        }
        if out.last().is_some_and(|&b| b != b' ') {
            out.push(b' ');
        }
        out.extend_from_slice(line);
    }

    debug_assert!(out.len() <= buf.len());
    out
}

/// Replaces every maximal whitespace run in `buf` with one copy of
/// `replacement`.
///
/// Runs may span lines. Non-whitespace bytes are copied unchanged. The
/// output is sized as `buf.len() + replacement.len() * runs` before the
/// pass, where `runs` comes from [`count_whitespace_runs`].
///
/// ```rust
/// use txtscan::space_swap;
///
/// assert_eq!(
///     space_swap(b"  \nline-a\t\x0B\n\nline-b\n", "––".as_bytes()),
///     "––line-a––line-b––".as_bytes(),
/// );
/// ```
#[must_use]
pub fn space_swap(buf: &[u8], replacement: &[u8]) -> Vec<u8> {
    let capacity = buf.len() + replacement.len() * count_whitespace_runs(buf);
    let mut out = Vec::with_capacity(capacity);

    let mut i = 0;
    while i < buf.len() {
        if is_whitespace(buf[i]) {
            i += count_leading_whitespace(&buf[i..]);
            out.extend_from_slice(replacement);
        } else {
            let n = count_leading_non_whitespace(&buf[i..]);
            out.extend_from_slice(&buf[i..i + n]);
            i += n;
        }
    }

    debug_assert!(out.len() <= capacity);
    out
}
