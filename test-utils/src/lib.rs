//! Shared helpers for the integration tests. The tests exercise the whole
//! pipeline on source snippets and assert on the emitted assembly text, so
//! everything here works on strings.

use micro_c::{compile, CompileError};

/// Compile a source snippet, panicking with the compiler error on failure.
pub fn compile_ok(source: &str) -> String {
    match compile(source) {
        Ok(assembly) => assembly,
        Err(error) => panic!("compilation failed: {error}"),
    }
}

/// Compile a snippet that is expected to fail; returns the error.
pub fn compile_err(source: &str) -> CompileError {
    match compile(source) {
        Ok(_) => panic!("compilation unexpectedly succeeded"),
        Err(error) => error,
    }
}

/// Collapse runs of whitespace so assertions are layout-insensitive.
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether the assembly contains the given line, modulo whitespace.
pub fn has_line(assembly: &str, expected: &str) -> bool {
    let expected = normalize(expected);
    assembly.lines().any(|line| normalize(line) == expected)
}

/// How often the given line occurs, modulo whitespace.
pub fn count_lines(assembly: &str, expected: &str) -> usize {
    let expected = normalize(expected);
    assembly
        .lines()
        .filter(|line| normalize(line) == expected)
        .count()
}

/// Whether a label definition `name:` exists in the text section.
pub fn has_label(assembly: &str, name: &str) -> bool {
    has_line(assembly, &format!("{name}:"))
}

/// Byte index of the first line matching `expected`, for ordering checks.
pub fn line_index(assembly: &str, expected: &str) -> Option<usize> {
    let expected = normalize(expected);
    let mut index = 0;
    for line in assembly.lines() {
        if normalize(line) == expected {
            return Some(index);
        }
        index += line.len() + 1;
    }
    None
}
