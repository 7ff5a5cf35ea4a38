use thiserror::Error;

/// Failure of a [`text`](crate::text) operation that cannot keep its output
/// valid UTF-8.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A fixed-width cut landed inside a multi-byte scalar.
    #[error("cutting {offset} bytes splits a UTF-8 scalar on line {line}")]
    SplitScalar {
        /// Zero-based line index.
        line: usize,
        /// Byte offset of the cut within the line.
        offset: usize,
    },
}
