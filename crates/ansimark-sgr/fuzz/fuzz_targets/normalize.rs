#![no_main]
use ansimark_sgr::{normalize, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 10000 { &data[..10000] } else { data };
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let normalized = normalize(raw);

    let mut text_len = 0;
    for token in tokenize(&normalized) {
        assert!(!token.text().is_empty());
        text_len += token.text().len();
    }
    assert!(text_len <= normalized.len());
});
