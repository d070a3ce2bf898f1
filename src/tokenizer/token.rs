#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_line;

/// A unit of comparison: a whole line, or a run of characters within one.
///
/// Every token carries the text exactly as it appeared in the input next
/// to the form used for equality checks. Line tokens compare by their
/// whitespace-normalized form so alignment tolerates quantity changes;
/// word tokens compare verbatim so quantity changes inside an
/// already-changed line stay visible.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Eq)]
pub struct Token {
    original: String,
    normalized: String,
}

impl Token {
    pub fn new(original: String, normalized: String) -> Self {
        Self {
            original,
            normalized,
        }
    }

    /// A token that compares by its exact text.
    pub fn verbatim(text: &str) -> Self { Self::new(text.to_owned(), text.to_owned()) }

    /// A token for a whole line, comparing by its normalized form.
    pub fn line(text: &str) -> Self { Self::new(text.to_owned(), normalize_line(text)) }

    /// The text as it appeared in the input.
    pub fn original(&self) -> &str { &self.original }

    /// The form used for equality checks.
    pub fn normalized(&self) -> &str { &self.normalized }
}

/// Tokens compare by their normalized form; the original text is only
/// carried for display.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool { self.normalized == other.normalized }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self { Self::verbatim(text) }
}
