//! ansimark - ANSI colored text to styled markup
//!
//! Converts blocks of text containing ANSI SGR escape sequences into markup
//! where every styled run is wrapped in an element carrying one CSS class
//! per active style:
//! - Escape spellings `^[`, `\x1b[`, `\e[` and `\033[`
//! - Bold, dim, italic, underline, blink, inverse, strikethrough
//! - 8 standard, 8 bright and 256 indexed colors
//!
//! Conversion never fails; unknown or non-SGR sequences are dropped or left
//! as text.
//!
//! ```
//! assert_eq!(
//!     ansimark::convert("^[[1;32mok^[[0m done"),
//!     r#"<span class="ansi-bold ansi-fg-2">ok</span> done"#
//! );
//! ```

pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod host;
pub mod render;

// Re-export main types for convenience
pub use ansimark_sgr::{normalize, parse, strip, tokenize, StyleState, StyleTag, Token};
pub use config::MarkupConfig;
pub use converter::Converter;
pub use error::{ConvertError, ConvertResult};
pub use host::{register, BlockHost, BlockProcessor};
pub use render::{render, MarkupRenderer};

/// Converts one block of raw text to markup with the default configuration.
pub fn convert(source: &str) -> String {
    Converter::default().convert(source)
}
