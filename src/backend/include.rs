//! Detection of the dialect header `#include`.
//!
//! Generated code no longer needs the dialect header (its keywords are gone), so the first `#include` of it in
//! the leading code chunk is commented out. Both `"..."` and `<...>` forms match, with or without a leading
//! directory, and only whitespace may follow the closing delimiter.

use crate::frontend::scanner::Scanner;

/// Return `true` if `line` is an `#include` of `header`.
///
/// ## Examples
/// ```rust
/// use flatco::backend::include::is_header_include;
///
/// assert!(is_header_include("#include \"flatco.h\"", "flatco.h"));
/// assert!(is_header_include("  # include <lib/flatco.h>  \n", "flatco.h"));
/// assert!(!is_header_include("#include \"myflatco.h\"", "flatco.h"));
/// ```
pub fn is_header_include(line: &str, header: &str) -> bool {
    included_path(line).is_some_and(|path| path == header || path.strip_suffix(header).is_some_and(|dir| dir.ends_with('/')))
}

/// Byte offset of the start of the first line of `text` that includes `header`.
pub fn find_header_include(text: &str, header: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if is_header_include(line, header) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// The path between the delimiters of an `#include` directive, if `line` is one.
fn included_path(line: &str) -> Option<&str> {
    let mut scanner = Scanner::new(line);
    if scanner.skip_trivia().ok()? != Some(b'#') {
        return None;
    }
    scanner.bump();
    scanner.skip_trivia().ok()?;
    let directive = scanner.read_identifier().ok()?;
    if directive.text(line) != "include" {
        return None;
    }
    let close = match scanner.skip_trivia().ok()? {
        Some(b'"') => '"',
        Some(b'<') => '>',
        _ => return None,
    };
    scanner.bump();
    line[scanner.offset()..].trim_end().strip_suffix(close)
}
