//! Indentation block dragging.
//!
//! A drag walks a buffer line by line from the start and consumes lines
//! while they satisfy an indentation predicate. The result is always the
//! consumed prefix of the input together with its length, so the caller can
//! continue from `&buf[used..]`.

use crate::{
    lines::next_line, options::DragOptions, scan::count_leading_whitespace,
    trim::is_all_whitespace,
};

/// Consumes lines from the start of `buf` according to `options`.
///
/// Returns `(block, used)` with `block == &buf[..used]`. The first line
/// that fails the predicate, and everything after it, is left unconsumed.
#[must_use]
pub fn drag_with(buf: &[u8], options: DragOptions) -> (&[u8], usize) {
    let mut used = 0;

    if options.exempt_first_line && !buf.is_empty() {
        let (line, width) = next_line(buf);
        used = width;
        if is_all_whitespace(line) {
            return (&buf[..used], used);
        }
    }

    while used < buf.len() {
        let (line, width) = next_line(&buf[used..]);
        let keep = count_leading_whitespace(line) >= options.indent
            || (options.keep_empty_lines && line.is_empty());
        if !keep {
            break;
        }
        used += width;
    }

    debug_assert!(used <= buf.len());
    (&buf[..used], used)
}

/// Consumes lines while each has at least `indent` leading whitespace
/// bytes.
///
/// The first under-indented line ends the block, including an empty line
/// or one whose only content is too few blanks. With `indent == 0` the
/// whole buffer is consumed.
///
/// ```rust
/// use txtscan::drag_by_indent;
///
/// assert_eq!(drag_by_indent(b"  hola\n   hi\n hoy", 2), (&b"  hola\n   hi\n"[..], 13));
/// ```
#[must_use]
pub fn drag_by_indent(buf: &[u8], indent: usize) -> (&[u8], usize) {
    drag_with(buf, DragOptions::with_indent(indent))
}

/// Like [`drag_by_indent`], but the first line is always taken.
///
/// If that first line is blank it is the whole block; otherwise the indent
/// test applies from the second line on.
#[must_use]
pub fn drag_line_and_more_by_indent(buf: &[u8], indent: usize) -> (&[u8], usize) {
    drag_with(
        buf,
        DragOptions {
            exempt_first_line: true,
            ..DragOptions::with_indent(indent)
        },
    )
}

/// Like [`drag_by_indent`], but zero-length lines never end the block.
///
/// Only a non-empty line with fewer than `indent` leading whitespace bytes
/// stops the walk.
#[must_use]
pub fn drag_all_by_indent(buf: &[u8], indent: usize) -> (&[u8], usize) {
    drag_with(
        buf,
        DragOptions {
            keep_empty_lines: true,
            ..DragOptions::with_indent(indent)
        },
    )
}
