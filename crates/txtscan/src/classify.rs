/// Returns `true` for the six whitespace bytes: space, `\t`, `\n`, `\v`
/// (0x0B), `\f` (0x0C) and `\r`.
///
/// Every other byte is payload, so multi-byte UTF-8 sequences never
/// classify as whitespace.
#[inline]
#[must_use]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` for bytes that count towards a line's indentation
/// (space and tab only).
#[inline]
#[must_use]
pub const fn is_indent_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}
