//! Splits an indented outline into sections and prints each one on a
//! single line.
//!
//! A section is an unindented heading followed by every line indented by
//! at least two bytes; blank lines inside a body are kept. Pass a file path
//! to read it instead of the built-in sample:
//!
//! ```text
//! cargo run -p txtscan --example outline -- notes.txt
//! ```

use std::{env, fs, process::ExitCode};

use txtscan::{DragOptions, drag_with, linelize, next_line, remove_indent, tokenize};

const SAMPLE: &str = "\
Parsing
  Tokens are maximal runs of non-whitespace.
  Lines end at a line feed; carriage returns
  stay on the line.

  Blank lines inside a section are kept.
Rendering
    Deeper indentation is just more of the body.
Done
";

fn main() -> ExitCode {
    let input = match env::args_os().nth(1) {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                eprintln!("outline: {}: {err}", path.to_string_lossy());
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let options = DragOptions {
        indent: 2,
        exempt_first_line: true,
        keep_empty_lines: true,
    };

    let mut rest = &input[..];
    while !rest.is_empty() {
        let (section, used) = drag_with(rest, options);
        let (heading, heading_len) = next_line(section);
        let body = remove_indent(&section[heading_len..], 2);

        println!(
            "{} ({} words): {}",
            String::from_utf8_lossy(heading),
            tokenize(&body).len(),
            String::from_utf8_lossy(&linelize(&body)),
        );
        rest = &rest[used..];
    }

    ExitCode::SUCCESS
}
