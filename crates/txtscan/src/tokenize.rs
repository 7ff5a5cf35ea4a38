use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::scan::{count_leading_non_whitespace, count_leading_whitespace};

/// Iterator over the whitespace-separated tokens of a buffer.
///
/// Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

/// Iterates the maximal non-whitespace runs of `buf`.
#[must_use]
pub fn tokens(buf: &[u8]) -> Tokens<'_> {
    Tokens { rest: buf }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.rest[count_leading_whitespace(self.rest)..];
        let width = count_leading_non_whitespace(rest);
        let (token, tail) = rest.split_at(width);
        self.rest = tail;
        (width > 0).then_some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Splits `buf` on whitespace runs. Empty or blank input gives no tokens.
///
/// ```rust
/// use txtscan::tokenize;
///
/// let toks = tokenize(b"hola,\n\n\n\nque\t\x0B tal!");
/// assert_eq!(toks, [&b"hola,"[..], b"que", b"tal!"]);
/// ```
#[must_use]
pub fn tokenize(buf: &[u8]) -> Vec<&[u8]> {
    tokens(buf).collect()
}
