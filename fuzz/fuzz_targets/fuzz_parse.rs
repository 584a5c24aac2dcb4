#![no_main]

use arbitrary::Arbitrary;
use inipack::{Ini, ParserOptions};
use libfuzzer_sys::fuzz_target;

/// A line shaped like configuration, so most inputs get past the first line.
#[derive(Arbitrary, Debug)]
enum FuzzLine {
    Blank(u8),
    Comment(String),
    Section(String),
    Pair { key: String, value: String },
    Raw(Vec<u8>),
}

#[derive(Arbitrary, Debug)]
struct Input {
    lines: Vec<FuzzLine>,
    crlf: bool,
    limit: Option<u16>,
}

impl Input {
    fn render(&self) -> Vec<u8> {
        let newline: &[u8] = if self.crlf { b"\r\n" } else { b"\n" };
        let mut out = Vec::new();
        for line in &self.lines {
            match line {
                FuzzLine::Blank(pad) => out.extend(std::iter::repeat_n(b' ', usize::from(pad % 4))),
                FuzzLine::Comment(text) => {
                    out.push(b';');
                    out.extend_from_slice(text.as_bytes());
                }
                FuzzLine::Section(name) => {
                    out.push(b'[');
                    out.extend_from_slice(name.as_bytes());
                    out.push(b']');
                }
                FuzzLine::Pair { key, value } => {
                    out.extend_from_slice(key.as_bytes());
                    out.extend_from_slice(b" = ");
                    out.extend_from_slice(value.as_bytes());
                }
                FuzzLine::Raw(bytes) => out.extend_from_slice(bytes),
            }
            out.extend_from_slice(newline);
        }
        out
    }
}

fn check(src: &[u8], options: ParserOptions) {
    let Ok(ini) = Ini::parse_with(src, options) else {
        return;
    };

    let packed = ini.packed();
    assert_eq!(packed.last(), Some(&0));
    if let Some(limit) = options.max_packed_len {
        assert!(packed.len() <= limit);
    }

    let mut count = 0;
    for record in &ini {
        assert!(!record.value.is_empty());
        assert!(!record.key.contains(&b'='));
        if let Ok(key) = std::str::from_utf8(record.key) {
            assert!(ini.contains(key));
        }
        count += 1;
    }
    assert_eq!(count, ini.len());

    let again = Ini::parse_bytes(src).expect("unlimited parse accepts what a limited one did");
    assert_eq!(again.packed(), packed);
}

fuzz_target!(|input: Input| {
    let src = input.render();
    check(&src, ParserOptions::default());
    check(
        &src,
        ParserOptions {
            max_packed_len: input.limit.map(usize::from),
        },
    );
});
