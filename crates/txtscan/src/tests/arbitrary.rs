use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use bstr::BStr;
use quickcheck::{Arbitrary, Gen};

/// Pieces biased towards the shapes the scanners care about: runs of every
/// whitespace byte, blank lines, indentation and multi-byte payload.
const PIECES: &[&[u8]] = &[
    b" ",
    b"  ",
    b"\t",
    b"\n",
    b"\n\n",
    b"\x0B",
    b"\x0C",
    b"\r",
    b"\r\n",
    b"a",
    b"hola",
    b"x-y!",
    "–".as_bytes(),
    "の".as_bytes(),
    "ñ".as_bytes(),
];

/// Whitespace-heavy byte text for property tests.
#[derive(Clone, PartialEq, Eq)]
pub struct Text(pub Vec<u8>);

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(&self.0), f)
    }
}

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = usize::arbitrary(g) % (g.size() + 1);
        let mut buf = Vec::new();
        for _ in 0..n {
            buf.extend_from_slice(g.choose(PIECES).unwrap());
        }
        Text(buf)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Text))
    }
}

/// Small indentation threshold; large values make every drag trivially empty.
#[derive(Clone, Copy, Debug)]
pub struct Indent(pub usize);

impl Arbitrary for Indent {
    fn arbitrary(g: &mut Gen) -> Self {
        Indent(usize::arbitrary(g) % 6)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Indent))
    }
}

pub fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
