//! Word-level input types.

use serde::{Deserialize, Serialize};

/// A single extracted word with its text and bounding box.
///
/// Words are produced by an external text-extraction component (e.g. a
/// pdfplumber-style word extractor) and consumed as-is. Coordinates are
/// page points with the origin at the top-left: `x0`/`x1` are the left
/// and right edges, `top`/`bottom` the upper and lower edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The text content
    pub text: String,

    /// Left edge
    pub x0: f32,

    /// Right edge
    pub x1: f32,

    /// Upper edge
    pub top: f32,

    /// Lower edge (used as the row-clustering baseline)
    pub bottom: f32,

    /// Whether the text runs upright; sideways text is filtered out
    /// before row building
    #[serde(default = "default_upright")]
    pub upright: bool,

    /// Extractor object type (informational)
    #[serde(default = "default_object_type")]
    pub object_type: String,
}

fn default_upright() -> bool {
    true
}

fn default_object_type() -> String {
    "word".to_string()
}

impl Word {
    /// Create a new word with the given text and bounding box.
    pub fn new(text: impl Into<String>, x0: f32, x1: f32, top: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            x0,
            x1,
            top,
            bottom,
            upright: true,
            object_type: "word".to_string(),
        }
    }

    /// The baseline used for row clustering.
    pub fn baseline(&self) -> f32 {
        self.bottom
    }

    /// Horizontal width of the word.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Check whether two words overlap horizontally (strict interval
    /// intersection: touching edges do not count).
    pub fn h_overlap(&self, other: &Word) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1
    }

    /// An empty-text copy of this word, used as a padding cell by the
    /// table aligner.
    pub fn as_filler(&self) -> Self {
        Self {
            text: String::new(),
            ..self.clone()
        }
    }
}
