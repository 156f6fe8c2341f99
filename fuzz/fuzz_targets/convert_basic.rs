#![no_main]
use libfuzzer_sys::fuzz_target;

use ansimark::convert;

fuzz_target!(|data: &[u8]| {
    // Skip empty input
    if data.is_empty() {
        return;
    }

    // Limit input size to prevent timeouts
    let data = if data.len() > 10000 { &data[..10000] } else { data };

    let source = String::from_utf8_lossy(data);
    let html = convert(&source);

    // Text is always escaped, so every container that opens also closes.
    assert_eq!(html.matches("<span").count(), html.matches("</span>").count());
    assert!(!html.contains('\n'));
});
