#![no_main]
use inspectxml::xml::{build_tree, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = tokenize(s) {
            for token in &tokens {
                assert!(token.end() <= s.len());
            }
            let _ = build_tree(&tokens, s);
        }
    }
});
