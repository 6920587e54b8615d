#![no_main]
use inspectxml::from_str;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let first = from_str(s);
        assert_eq!(first, from_str(s));
    }
});
