// src/constants.rs

// Markup defaults
pub const DEFAULT_CLASS_PREFIX: &str = "ansi-";
pub const DEFAULT_CONTAINER_TAG: &str = "span";
pub const DEFAULT_LINE_BREAK: &str = "<br>";

/// Code-block identifiers the converter is registered under.
pub const BLOCK_LANGUAGES: [&str; 3] = ["ansi", "ANSI", "Ansi"];
