#![no_main]
use ansimark_sgr::{tokenize, StyleTag};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 50 {
        return;
    }

    // Build one SGR sequence per input, parameters drawn from the byte values.
    let mut seq = String::from("\x1b[");
    for (i, &byte) in data.iter().enumerate() {
        if i > 0 {
            seq.push(';');
        }
        seq.push_str(&((byte as u16) % 300).to_string());
        if i >= 10 {
            break;
        }
    }
    seq.push_str("mx");

    let tokens = tokenize(&seq);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].text(), "x");

    let styles = tokens[0].styles();
    assert!(styles.iter().filter(|t| t.is_foreground()).count() <= 1);
    assert!(styles.iter().filter(|t| t.is_background()).count() <= 1);
    assert!(!styles.contains(StyleTag::Foreground(8)));
});
