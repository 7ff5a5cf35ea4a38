#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use txtscan::{
    DragOptions, count_whitespace_runs, drag_all_by_indent, drag_by_indent, drag_with,
    is_whitespace, linelize, remove_indent, remove_leading_rect, space_swap, split_lines,
    split_raw_lines, text, tokenize, trim_whitespace,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    indent: u8,
    exempt_first_line: bool,
    keep_empty_lines: bool,
    replacement: &'a [u8],
    buf: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let buf = input.buf;
    let indent = usize::from(input.indent % 16);

    let once = trim_whitespace(buf);
    assert_eq!(trim_whitespace(once), once);

    assert_eq!(split_raw_lines(buf).concat(), buf);
    let newlines = buf.iter().filter(|&&b| b == b'\n').count();
    let partial = usize::from(!buf.is_empty() && !buf.ends_with(b"\n"));
    assert_eq!(split_lines(buf).len(), newlines + partial);

    let (strict, strict_used) = drag_by_indent(buf, indent);
    let (all, all_used) = drag_all_by_indent(buf, indent);
    assert_eq!(strict.len(), strict_used);
    assert_eq!(all.len(), all_used);
    assert!(all.starts_with(strict));
    assert!(buf.starts_with(all));

    let options = DragOptions {
        indent,
        exempt_first_line: input.exempt_first_line,
        keep_empty_lines: input.keep_empty_lines,
    };
    let (block, used) = drag_with(buf, options);
    assert_eq!(block, &buf[..used]);

    let swapped = space_swap(buf, input.replacement);
    let whitespace = buf.iter().filter(|&&b| is_whitespace(b)).count();
    assert_eq!(
        swapped.len(),
        buf.len() - whitespace + input.replacement.len() * count_whitespace_runs(buf)
    );

    let joined = linelize(buf);
    assert_eq!(trim_whitespace(&joined), &joined[..]);

    for token in tokenize(buf) {
        assert!(!token.is_empty());
        assert!(!token.iter().copied().any(is_whitespace));
    }

    let _ = remove_indent(buf, indent);
    let _ = remove_leading_rect(buf, indent);

    if let Ok(s) = core::str::from_utf8(buf) {
        assert_eq!(text::linelize_str(s).as_bytes(), &joined[..]);
        let _ = text::remove_leading_rect_str(s, indent);
    }
});
