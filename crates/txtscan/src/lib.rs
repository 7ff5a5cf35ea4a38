//! Allocation-conscious scanning primitives over byte strings.
//!
//! Everything here works on raw bytes. The only bytes with meaning are the
//! six ASCII whitespace bytes (space, `\t`, `\n`, `\v`, `\f`, `\r`); every
//! other byte, including UTF-8 lead and continuation bytes, is opaque
//! payload and passes through untouched.
//!
//! Operations either borrow from their input (lines, trimmed views, dragged
//! blocks, tokens) or build a fresh buffer sized up front (the transforms).
//! None of them can fail and none mutate their input.
//!
//! ```rust
//! use txtscan::{drag_all_by_indent, linelize, space_swap};
//!
//! let (block, used) = drag_all_by_indent(b"  a\n\n  b\nc", 2);
//! assert_eq!(block, b"  a\n\n  b\n");
//! assert_eq!(used, 9);
//!
//! assert_eq!(linelize(b" one\n\n two \n"), b"one two");
//! assert_eq!(space_swap(b"a \t\nb", b"_"), b"a_b");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod drag;
mod error;
mod indent;
mod lines;
mod options;
mod scan;
mod tokenize;
mod transform;
mod trim;

pub mod text;

#[cfg(test)]
mod tests;

pub use classify::{is_indent_byte, is_whitespace};
pub use drag::{drag_all_by_indent, drag_by_indent, drag_line_and_more_by_indent, drag_with};
pub use error::TextError;
pub use indent::{remove_indent, remove_leading_rect};
pub use lines::{Lines, RawLines, lines, next_line, next_raw_line, raw_lines, split_lines, split_raw_lines};
pub use options::DragOptions;
pub use scan::{
    count_leading_indent_spaces, count_leading_non_whitespace, count_leading_whitespace,
    count_whitespace_runs, find_newline,
};
pub use tokenize::{Tokens, tokenize, tokens};
pub use transform::{linelize, space_swap};
pub use trim::{is_all_whitespace, trim_leading_whitespace, trim_trailing_whitespace, trim_whitespace};
