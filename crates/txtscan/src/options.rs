/// Configuration for [`drag_with`](crate::drag_with).
///
/// The three fixed draggers are presets over these options:
///
/// | function                                                        | `exempt_first_line` | `keep_empty_lines` |
/// |-----------------------------------------------------------------|---------------------|--------------------|
/// | [`drag_by_indent`](crate::drag_by_indent)                        | `false`             | `false`            |
/// | [`drag_line_and_more_by_indent`](crate::drag_line_and_more_by_indent) | `true`         | `false`            |
/// | [`drag_all_by_indent`](crate::drag_all_by_indent)                | `false`             | `true`             |
///
/// # Examples
///
/// ```rust
/// use txtscan::{DragOptions, drag_with};
///
/// let options = DragOptions {
///     indent: 2,
///     keep_empty_lines: true,
///     ..Default::default()
/// };
/// assert_eq!(drag_with(b"  a\n\n  b\nc", options), (&b"  a\n\n  b\n"[..], 9));
/// ```
///
/// # Default
///
/// `indent` is `0` and both flags are `false`, which consumes the whole
/// buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragOptions {
    /// Minimum count of leading whitespace bytes a line needs to stay in the
    /// block.
    ///
    /// The count uses general whitespace, so a line made only of blanks
    /// measures its full length.
    ///
    /// # Default
    ///
    /// `0`
    pub indent: usize,

    /// Whether the first line joins the block without an indent test.
    ///
    /// When the first line is blank (all whitespace) it is returned as the
    /// whole block and scanning stops there.
    ///
    /// # Default
    ///
    /// `false`
    pub exempt_first_line: bool,

    /// Whether zero-length lines stay in the block regardless of `indent`.
    ///
    /// Lines holding only whitespace are not zero-length and are still
    /// measured against `indent`.
    ///
    /// # Default
    ///
    /// `false`
    pub keep_empty_lines: bool,
}

impl DragOptions {
    /// Options with the given threshold and both flags off.
    #[must_use]
    pub const fn with_indent(indent: usize) -> Self {
        Self {
            indent,
            exempt_first_line: false,
            keep_empty_lines: false,
        }
    }
}
