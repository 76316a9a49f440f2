//! Page-level input types.

use serde::{Deserialize, Serialize};

use super::Word;

/// A single page of extracted words.
///
/// This is the input boundary: one `Page` per document page, produced by
/// the external extractor. No state persists across pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Extracted words, in extractor order
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            words: Vec::new(),
        }
    }

    /// Create a page with words.
    pub fn with_words(width: f32, height: f32, words: Vec<Word>) -> Self {
        Self {
            width,
            height,
            words,
        }
    }

    /// Horizontal center of the page, the reference line for the
    /// column-split detector.
    pub fn center(&self) -> f32 {
        self.width / 2.0
    }

    /// Check if the page has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
