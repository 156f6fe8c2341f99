// src/converter.rs
use ansimark_sgr::{normalize, Tokens};
use tracing::debug;

use crate::config::MarkupConfig;
use crate::error::ConvertResult;
use crate::render::MarkupRenderer;

/// Normalizer, tokenizer and renderer bound to one validated configuration.
///
/// Holds no per-call state, so one converter can serve any number of
/// blocks, including from several threads at once.
#[derive(Clone, Debug, Default)]
pub struct Converter {
    renderer: MarkupRenderer,
}

impl Converter {
    pub fn new(config: MarkupConfig) -> ConvertResult<Self> {
        config.validate()?;
        debug!(
            "Creating Converter with config: prefix={:?}, tag={:?}, line_break={:?}",
            config.class_prefix, config.container_tag, config.line_break
        );
        Ok(Self {
            renderer: MarkupRenderer::new(config),
        })
    }

    pub fn config(&self) -> &MarkupConfig {
        self.renderer.config()
    }

    /// Converts one block of raw text to markup.
    pub fn convert(&self, source: &str) -> String {
        let normalized = normalize(source);
        let mut out = String::with_capacity(normalized.len());
        for token in Tokens::new(&normalized) {
            self.renderer.render_token(&token, &mut out);
        }
        out
    }
}
