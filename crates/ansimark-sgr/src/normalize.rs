//! Escape normalization.
//!
//! Text pasted into a document rarely carries a real ESC byte. Logs copied
//! from shells and CI often spell it out as `^[`, `\x1b`, `\e` or `\033`.
//! [`normalize`] rewrites those spellings into the control byte and then
//! drops every `ESC [ ... m` sequence that is not a plain SGR sequence, so
//! the tokenizer only ever sees SGR.

use tracing::debug;

pub(crate) const ESC: u8 = 0x1B;

/// Textual spellings of the escape character, applied in order.
const ESCAPE_SPELLINGS: [(&str, &str); 4] = [
    ("^[", "\x1b"),
    ("\\x1b[", "\x1b["),
    ("\\e[", "\x1b["),
    ("\\033[", "\x1b["),
];

/// Rewrites alternate escape spellings and strips non-SGR `ESC [ ... m` sequences.
///
/// Never fails; anything that is not recognized is left as literal text.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_owned();
    for (spelling, canonical) in ESCAPE_SPELLINGS {
        if text.contains(spelling) {
            text = text.replace(spelling, canonical);
        }
    }
    strip_non_sgr(&text)
}

/// Deletes each `ESC [ <not m>* m` whose parameters are not `[0-9;]+`.
fn strip_non_sgr(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while let Some(offset) = memchr::memchr(ESC, &bytes[i..]) {
        let start = i + offset;
        if bytes.get(start + 1) != Some(&b'[') {
            i = start + 1;
            continue;
        }

        let params_start = start + 2;
        let Some(m_offset) = memchr::memchr(b'm', &bytes[params_start..]) else {
            // No terminator anywhere after this point, so no later ESC can match either.
            break;
        };
        let end = params_start + m_offset;
        let params = &text[params_start..end];

        if !is_sgr_params(params) {
            debug!("dropping non-SGR sequence {:?} at byte {}", params, start);
            out.push_str(&text[copied..start]);
            copied = end + 1;
        }
        i = end + 1;
    }

    out.push_str(&text[copied..]);
    out
}

pub(crate) fn is_sgr_params(params: &str) -> bool {
    !params.is_empty() && params.bytes().all(|b| b.is_ascii_digit() || b == b';')
}
