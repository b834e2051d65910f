#![no_main]
use libfuzzer_sys::fuzz_target;
use potconf::{ArrayLayout, Options, encode_to_string, parse_partial, parse_str};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // entries committed before a fatal error are complete, so they must round trip too
        let (first, _) = parse_partial(input);
        for layout in [ArrayLayout::Inline, ArrayLayout::Multiline] {
            let opts = Options {
                array_layout: layout,
                ..Options::default()
            };
            let encoded = match encode_to_string(&first, &opts) {
                Ok(s) => s,
                Err(e) => panic!("parsed table not encodable: {e}\nInput: {input:?}"),
            };
            match parse_str(&encoded) {
                Ok(second) => {
                    if first != second {
                        panic!(
                            "roundtrip mismatch!\nInput: {input:?}\nFirst: {first:?}\nRe-encoded: {encoded}\nSecond: {second:?}"
                        );
                    }
                }
                Err(e) => panic!("failed to parse re-encoded table: {e}\nRe-encoded: {encoded}"),
            }
        }
    }
});
