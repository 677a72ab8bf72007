//! Document text value object

use serde::{Deserialize, Serialize};

/// Plain text of a document under analysis (Value Object)
///
/// The surrounding application owns document acquisition (PDF extraction,
/// URL scraping); by the time the core sees a document it is plain text.
/// Tools interpolate a bounded prefix of the text into their prompt
/// templates via [`excerpt`](Self::excerpt) to respect provider context
/// limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    content: String,
}

impl DocumentText {
    /// Create a new document from extracted text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the full document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_content(self) -> String {
        self.content
    }

    /// Length of the document in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// A prefix of at most `max_chars` characters.
    ///
    /// Counts characters rather than bytes so a multi-byte code point is
    /// never split.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.content[..idx],
            None => &self.content,
        }
    }
}

impl From<&str> for DocumentText {
    fn from(s: &str) -> Self {
        DocumentText::new(s)
    }
}

impl From<String> for DocumentText {
    fn from(s: String) -> Self {
        DocumentText::new(s)
    }
}
