#![no_main]
use libfuzzer_sys::fuzz_target;

use ansimark::{parse, strip};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    // Token text is sliced from the input; it must stay valid UTF-8 and
    // concatenate to the stripped text.
    let joined: String = parse(source).iter().map(|t| t.text()).collect();
    assert_eq!(joined, strip(source));
});
