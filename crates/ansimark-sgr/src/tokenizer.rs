//! Style-stack tokenizer.
//!
//! Splits text at every `ESC [ <digits and ;> m` sequence. Text between
//! sequences becomes a [`Token`] carrying a snapshot of the styles that were
//! active when the text was reached; the sequence itself then updates the
//! running [`StyleState`].

use tracing::trace;

use crate::normalize::{is_sgr_params, ESC};
use crate::style::{StyleState, StyleTag};

/// A run of text and the styles active over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    text: String,
    styles: StyleState,
}

impl Token {
    /// `text` must be non-empty; the tokenizer never produces empty runs.
    pub fn new(text: impl Into<String>, styles: StyleState) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "token text must not be empty");
        Self { text, styles }
    }

    /// Plain text with no active styles.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, StyleState::new())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn styles(&self) -> &StyleState {
        &self.styles
    }

    pub fn is_styled(&self) -> bool {
        !self.styles.is_empty()
    }

    pub fn into_parts(self) -> (String, StyleState) {
        (self.text, self.styles)
    }
}

/// Tokenizes `text` in one call. Does not normalize; see [`crate::parse`].
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokens::new(text).collect()
}

/// Streaming tokenizer over a borrowed string.
///
/// Each call to `next` scans forward to the next SGR sequence and yields the
/// non-empty text before it, so callers can render incrementally.
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
    styles: StyleState,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            styles: StyleState::new(),
        }
    }

    /// Styles active at the current scan position.
    pub fn current_styles(&self) -> &StyleState {
        &self.styles
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.input.len() {
            let Some(seq) = find_sgr(self.input, self.pos) else {
                let text = &self.input[self.pos..];
                self.pos = self.input.len();
                return Some(Token::new(text, self.styles.clone()));
            };

            let text = &self.input[self.pos..seq.start];
            let token = (!text.is_empty()).then(|| Token::new(text, self.styles.clone()));

            apply_sgr(&mut self.styles, seq.params);
            self.pos = seq.end;

            if token.is_some() {
                return token;
            }
        }
        None
    }
}

/// Location of one `ESC [ params m` sequence.
#[derive(Debug, PartialEq, Eq)]
struct SgrSequence<'a> {
    start: usize,
    end: usize,
    params: &'a str,
}

fn find_sgr(input: &str, from: usize) -> Option<SgrSequence<'_>> {
    let bytes = input.as_bytes();
    let mut i = from;

    while let Some(offset) = memchr::memchr(ESC, &bytes[i..]) {
        let start = i + offset;
        i = start + 1;
        if bytes.get(start + 1) != Some(&b'[') {
            continue;
        }

        let params_start = start + 2;
        let params_len = bytes[params_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit() || **b == b';')
            .count();
        let final_pos = params_start + params_len;

        if bytes.get(final_pos) == Some(&b'm') {
            let params = &input[params_start..final_pos];
            if is_sgr_params(params) {
                return Some(SgrSequence {
                    start,
                    end: final_pos + 1,
                    params,
                });
            }
        }
    }
    None
}

/// Splits a parameter string on `;`.
///
/// Empty fields come back as `None` and are ignored. Digit runs too large
/// for a `u32` saturate at `u32::MAX`, so they still count as numbers.
fn parse_params(params: &str) -> Vec<Option<u32>> {
    params
        .split(';')
        .map(|field| {
            if field.is_empty() {
                return None;
            }
            Some(field.bytes().fold(0u32, |acc, b| {
                acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
            }))
        })
        .collect()
}

/// Applies the SGR parameter string `params` (`"1;31"`) to `styles`,
/// strictly left to right.
pub(crate) fn apply_sgr(styles: &mut StyleState, params: &str) {
    let params = parse_params(params);
    let params = params.as_slice();
    let mut i = 0;
    while i < params.len() {
        let Some(param) = params[i] else {
            trace!("ignoring empty SGR parameter at index {}", i);
            i += 1;
            continue;
        };
        match param {
            0 => styles.clear(),
            1 => {
                styles.insert(StyleTag::Bold);
            }
            2 => {
                styles.insert(StyleTag::Dim);
            }
            3 => {
                styles.insert(StyleTag::Italic);
            }
            4 => {
                styles.insert(StyleTag::Underline);
            }
            5 => {
                styles.insert(StyleTag::Blink);
            }
            7 => {
                styles.insert(StyleTag::Inverse);
            }
            9 => {
                styles.insert(StyleTag::Strikethrough);
            }
            21 | 22 => {
                styles.remove(StyleTag::Bold);
                styles.remove(StyleTag::Dim);
            }
            23 => {
                styles.remove(StyleTag::Italic);
            }
            24 => {
                styles.remove(StyleTag::Underline);
            }
            25 => {
                styles.remove(StyleTag::Blink);
            }
            27 => {
                styles.remove(StyleTag::Inverse);
            }
            29 => {
                styles.remove(StyleTag::Strikethrough);
            }
            30..=37 => styles.set_foreground(StyleTag::Foreground(palette_index(param - 30))),
            39 => styles.clear_foreground(),
            40..=47 => styles.set_background(StyleTag::Background(palette_index(param - 40))),
            49 => styles.clear_background(),
            90..=97 => {
                styles.set_foreground(StyleTag::BrightForeground(palette_index(param - 90)))
            }
            100..=107 => {
                styles.set_background(StyleTag::BrightBackground(palette_index(param - 100)))
            }
            38 | 48 => {
                if let Some(index) = extended_index(params, i) {
                    if param == 38 {
                        styles.set_foreground(StyleTag::Foreground256(index));
                    } else {
                        styles.set_background(StyleTag::Background256(index));
                    }
                    i += 2;
                } else {
                    trace!("incomplete extended color {} at index {}", param, i);
                }
            }
            other => trace!("ignoring unsupported SGR code {}", other),
        }
        i += 1;
    }
}

/// `N` of a `38;5;N` / `48;5;N` triplet starting at `i`.
fn extended_index(params: &[Option<u32>], i: usize) -> Option<u32> {
    match (params.get(i + 1), params.get(i + 2)) {
        (Some(Some(5)), Some(Some(index))) => Some(*index),
        _ => None,
    }
}

fn palette_index(offset: u32) -> u8 {
    (offset & 7) as u8
}
