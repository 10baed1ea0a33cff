//! Naming conventions of generated code (well-known identifiers and markers).
//!
//! Every expansion owns a sequence id. Parameter temporaries and the exit label of that expansion are derived
//! from it, so repeated or nested inlining of the same pseudo-function never produces colliding names.
//!
//! ## Examples
//! ```rust
//! use flatco_core::lang::conventions;
//!
//! assert_eq!(conventions::param_prefix(26), "_BLparam1a_");
//! assert_eq!(conventions::param_temp(26, "count"), "_BLparam1a_count");
//! assert_eq!(conventions::exit_label(26), "_BLexit1a");
//! ```

/// Basename of the dialect header. Its first `#include` is commented out in generated code.
pub const HEADER_BASENAME: &str = "flatco.h";

/// Prefix of parameter temporaries (followed by the hex sequence id and `_`).
pub const PARAM_TEMP_PREFIX: &str = "_BLparam";

/// Prefix of expansion exit labels (followed by the hex sequence id).
pub const EXIT_LABEL_PREFIX: &str = "_BLexit";

/// Preprocessor directive used for line markers.
pub const LINE_DIRECTIVE: &str = "#line";

/// Text inserted in front of a commented-out directive.
pub const LINE_COMMENT: &str = "//";

/// Prefix inserted in front of a parameter reference for expansion `seq`.
pub fn param_prefix(seq: usize) -> String {
    format!("{PARAM_TEMP_PREFIX}{seq:x}_")
}

/// Full temporary name for parameter `name` in expansion `seq`.
pub fn param_temp(seq: usize, name: &str) -> String {
    format!("{}{name}", param_prefix(seq))
}

/// Exit label of expansion `seq`.
pub fn exit_label(seq: usize) -> String {
    format!("{EXIT_LABEL_PREFIX}{seq:x}")
}

/// Quote a file identifier for use inside a line marker.
pub fn quote_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
