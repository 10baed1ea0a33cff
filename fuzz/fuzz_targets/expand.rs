#![no_main]

use flatco::ExpandConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are expected; panics are not
        let _ = flatco::expand_source(s, &ExpandConfig::new());
    }
});
