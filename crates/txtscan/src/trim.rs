use crate::{classify::is_whitespace, scan::count_leading_whitespace};

/// Drops the longest whitespace suffix of `buf`.
#[must_use]
pub fn trim_trailing_whitespace(buf: &[u8]) -> &[u8] {
    let end = buf.iter().rposition(|&b| !is_whitespace(b)).map_or(0, |i| i + 1);
    &buf[..end]
}

/// Drops the longest whitespace prefix of `buf`.
#[must_use]
pub fn trim_leading_whitespace(buf: &[u8]) -> &[u8] {
    &buf[count_leading_whitespace(buf)..]
}

/// Drops whitespace from both ends of `buf`.
#[must_use]
pub fn trim_whitespace(buf: &[u8]) -> &[u8] {
    trim_trailing_whitespace(trim_leading_whitespace(buf))
}

/// Returns `true` when `buf` holds nothing but whitespace (or nothing at
/// all).
#[must_use]
pub fn is_all_whitespace(buf: &[u8]) -> bool {
    count_leading_whitespace(buf) == buf.len()
}
