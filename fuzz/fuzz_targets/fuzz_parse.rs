#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (_table, outcome) = potconf::parse_partial(s);
        if let Err(e) = outcome {
            assert!(e.line().is_some(), "fatal parse error without a line: {e}");
        }
    }
});
