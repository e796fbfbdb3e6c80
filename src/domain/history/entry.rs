//! Entry value object

use std::fmt;

/// Entries at or above this many characters are rejected.
/// Oversized clipboard captures are filtered, not treated as errors.
pub const MAX_ENTRY_CHARS: usize = 10_000;

/// A single clipboard text entry.
/// Guaranteed non-empty and under [`MAX_ENTRY_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Validate and wrap clipboard text.
    /// Returns `None` for empty or oversized text (a filtering policy,
    /// not a failure).
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() || text.chars().count() >= MAX_ENTRY_CHARS {
            return None;
        }
        Some(Self(text))
    }

    /// The entry text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the entry, returning the text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
