//! Markup rendering.
//!
//! Each token becomes its escaped text, wrapped in a container element whose
//! classes name the active styles:
//!
//! ```
//! use ansimark::{render, tokenize};
//!
//! let html = render(&tokenize("\x1b[1;31mfail\x1b[0m <ok>"));
//! assert_eq!(html, r#"<span class="ansi-bold ansi-fg-1">fail</span> &lt;ok&gt;"#);
//! ```

use std::fmt::Write;

use ansimark_sgr::{StyleState, Token};

use crate::config::MarkupConfig;

/// Renders tokens with the default [`MarkupConfig`].
pub fn render(tokens: &[Token]) -> String {
    MarkupRenderer::default().render(tokens)
}

#[derive(Clone, Debug, Default)]
pub struct MarkupRenderer {
    config: MarkupConfig,
}

impl MarkupRenderer {
    /// Wraps an already validated configuration.
    pub fn new(config: MarkupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarkupConfig {
        &self.config
    }

    pub fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::with_capacity(tokens.iter().map(|t| t.text().len()).sum());
        for token in tokens {
            self.render_token(token, &mut out);
        }
        out
    }

    /// Appends the markup for one token to `out`.
    pub fn render_token(&self, token: &Token, out: &mut String) {
        if !token.is_styled() {
            escape_into(token.text(), &self.config.line_break, out);
            return;
        }

        let tag = &self.config.container_tag;
        out.push('<');
        out.push_str(tag);
        out.push_str(" class=\"");
        self.write_classes(token.styles(), out);
        out.push_str("\">");
        escape_into(token.text(), &self.config.line_break, out);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    fn write_classes(&self, styles: &StyleState, out: &mut String) {
        for (i, tag) in styles.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}{}", self.config.class_prefix, tag);
        }
    }
}

/// Escapes `&`, `<`, `>` and replaces `\n` with `line_break`.
pub fn escape_into(text: &str, line_break: &str, out: &mut String) {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        let replacement = match c {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '\n' => line_break,
            _ => continue,
        };
        out.push_str(&text[start..i]);
        out.push_str(replacement);
        start = i + 1;
    }
    out.push_str(&text[start..]);
}
