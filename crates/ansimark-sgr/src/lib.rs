//! # ansimark SGR tokenizer
//!
//! Turns text containing ANSI SGR escape sequences into runs of text tagged
//! with the styles active over them. Escape spellings such as `^[` or
//! `\033[` are normalized first; cursor movement and other non-SGR
//! sequences are dropped. Parsing is total: every input yields tokens.
//!
//! ```
//! use ansimark_sgr::{parse, StyleTag};
//!
//! let tokens = parse("^[[1;31mfail^[[0m ok");
//! assert_eq!(tokens[0].text(), "fail");
//! assert_eq!(tokens[0].styles().as_slice(), &[StyleTag::Bold, StyleTag::Foreground(1)]);
//! assert!(!tokens[1].is_styled());
//! ```

pub mod normalize;
pub mod style;
pub mod tokenizer;

pub use normalize::normalize;
pub use style::{StyleState, StyleTag};
pub use tokenizer::{tokenize, Token, Tokens};

/// Normalizes `raw` and tokenizes the result.
pub fn parse(raw: &str) -> Vec<Token> {
    tokenize(&normalize(raw))
}

/// Text content of `raw` with every escape sequence removed.
pub fn strip(raw: &str) -> String {
    parse(raw)
        .into_iter()
        .map(|token| token.into_parts().0)
        .collect()
}
