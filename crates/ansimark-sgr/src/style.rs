use std::fmt;
use std::slice;

/// A single rendition attribute that can be active on a run of text.
///
/// Numeric variants carry the palette index taken from the SGR code
/// (`31` becomes `Foreground(1)`, `38;5;202` becomes `Foreground256(202)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Inverse,
    Strikethrough,
    /// SGR 30..=37
    Foreground(u8),
    /// SGR 40..=47
    Background(u8),
    /// SGR 90..=97
    BrightForeground(u8),
    /// SGR 100..=107
    BrightBackground(u8),
    /// SGR 38;5;N
    Foreground256(u32),
    /// SGR 48;5;N
    Background256(u32),
}

impl StyleTag {
    /// True for every member of the foreground color family (plain, bright, 256).
    pub fn is_foreground(&self) -> bool {
        matches!(
            self,
            StyleTag::Foreground(_) | StyleTag::BrightForeground(_) | StyleTag::Foreground256(_)
        )
    }

    /// True for every member of the background color family (plain, bright, 256).
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            StyleTag::Background(_) | StyleTag::BrightBackground(_) | StyleTag::Background256(_)
        )
    }

    pub fn is_color(&self) -> bool {
        self.is_foreground() || self.is_background()
    }
}

/// Writes the canonical tag name, e.g. `bold`, `fg-1`, `bright-bg-3`, `fg-256-202`.
impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleTag::Bold => f.write_str("bold"),
            StyleTag::Dim => f.write_str("dim"),
            StyleTag::Italic => f.write_str("italic"),
            StyleTag::Underline => f.write_str("underline"),
            StyleTag::Blink => f.write_str("blink"),
            StyleTag::Inverse => f.write_str("inverse"),
            StyleTag::Strikethrough => f.write_str("strikethrough"),
            StyleTag::Foreground(n) => write!(f, "fg-{}", n),
            StyleTag::Background(n) => write!(f, "bg-{}", n),
            StyleTag::BrightForeground(n) => write!(f, "bright-fg-{}", n),
            StyleTag::BrightBackground(n) => write!(f, "bright-bg-{}", n),
            StyleTag::Foreground256(n) => write!(f, "fg-256-{}", n),
            StyleTag::Background256(n) => write!(f, "bg-256-{}", n),
        }
    }
}

/// Insertion-ordered set of active style tags.
///
/// At most one foreground and one background tag are active at any time
/// when colors go through [`StyleState::set_foreground`] and
/// [`StyleState::set_background`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleState {
    tags: Vec<StyleTag>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: StyleTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn iter(&self) -> slice::Iter<'_, StyleTag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[StyleTag] {
        &self.tags
    }

    /// Adds `tag` at the end unless it is already active.
    /// Returns whether the set changed.
    pub fn insert(&mut self, tag: StyleTag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove(&mut self, tag: StyleTag) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| *t != tag);
        self.tags.len() != before
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn clear_foreground(&mut self) {
        self.tags.retain(|t| !t.is_foreground());
    }

    pub fn clear_background(&mut self) {
        self.tags.retain(|t| !t.is_background());
    }

    /// Replaces whatever foreground tag is active with `tag`.
    pub fn set_foreground(&mut self, tag: StyleTag) {
        debug_assert!(tag.is_foreground());
        self.clear_foreground();
        self.tags.push(tag);
    }

    /// Replaces whatever background tag is active with `tag`.
    pub fn set_background(&mut self, tag: StyleTag) {
        debug_assert!(tag.is_background());
        self.clear_background();
        self.tags.push(tag);
    }

    pub fn foreground(&self) -> Option<StyleTag> {
        self.tags.iter().copied().find(StyleTag::is_foreground)
    }

    pub fn background(&self) -> Option<StyleTag> {
        self.tags.iter().copied().find(StyleTag::is_background)
    }
}

impl<'a> IntoIterator for &'a StyleState {
    type Item = &'a StyleTag;
    type IntoIter = slice::Iter<'a, StyleTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl FromIterator<StyleTag> for StyleState {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut state = StyleState::new();
        for tag in iter {
            state.insert(tag);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        assert_eq!(StyleTag::Bold.to_string(), "bold");
        assert_eq!(StyleTag::Strikethrough.to_string(), "strikethrough");
        assert_eq!(StyleTag::Foreground(1).to_string(), "fg-1");
        assert_eq!(StyleTag::Background(7).to_string(), "bg-7");
        assert_eq!(StyleTag::BrightForeground(2).to_string(), "bright-fg-2");
        assert_eq!(StyleTag::BrightBackground(0).to_string(), "bright-bg-0");
        assert_eq!(StyleTag::Foreground256(202).to_string(), "fg-256-202");
        assert_eq!(StyleTag::Background256(16).to_string(), "bg-256-16");
    }

    #[test]
    fn color_families() {
        assert!(StyleTag::Foreground256(3).is_foreground());
        assert!(StyleTag::BrightForeground(3).is_foreground());
        assert!(!StyleTag::BrightForeground(3).is_background());
        assert!(StyleTag::Background(3).is_background());
        assert!(StyleTag::Background256(3).is_color());
        assert!(!StyleTag::Bold.is_color());
    }

    #[test]
    fn insert_is_unique_and_keeps_position() {
        let mut s = StyleState::new();
        assert!(s.insert(StyleTag::Bold));
        assert!(s.insert(StyleTag::Italic));
        assert!(!s.insert(StyleTag::Bold));
        assert_eq!(s.as_slice(), &[StyleTag::Bold, StyleTag::Italic]);
    }

    #[test]
    fn remove_and_clear() {
        let mut s: StyleState = [StyleTag::Bold, StyleTag::Dim, StyleTag::Underline]
            .into_iter()
            .collect();
        assert!(s.remove(StyleTag::Dim));
        assert!(!s.remove(StyleTag::Dim));
        assert_eq!(s.len(), 2);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn foreground_replaces_whole_family() {
        let mut s = StyleState::new();
        s.insert(StyleTag::Bold);
        s.set_foreground(StyleTag::Foreground(1));
        s.set_foreground(StyleTag::BrightForeground(2));
        s.set_foreground(StyleTag::Foreground256(202));
        assert_eq!(s.as_slice(), &[StyleTag::Bold, StyleTag::Foreground256(202)]);
        assert_eq!(s.foreground(), Some(StyleTag::Foreground256(202)));
        assert_eq!(s.background(), None);
    }

    #[test]
    fn background_does_not_touch_foreground() {
        let mut s = StyleState::new();
        s.set_foreground(StyleTag::Foreground(4));
        s.set_background(StyleTag::Background(1));
        s.set_background(StyleTag::BrightBackground(3));
        assert_eq!(
            s.as_slice(),
            &[StyleTag::Foreground(4), StyleTag::BrightBackground(3)]
        );
        s.clear_background();
        assert_eq!(s.as_slice(), &[StyleTag::Foreground(4)]);
        s.clear_foreground();
        assert!(s.is_empty());
    }
}
