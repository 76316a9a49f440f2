//! Reconstruction options and tolerance configuration.

/// Options controlling the reconstruction pipeline.
///
/// The tolerances are calibrated for the ~10pt character sizes common in
/// financial report PDFs; pass a custom instance for other page
/// profiles.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Vertical tolerance for clustering words into rows. Word heights
    /// vary slightly (commas, CJK vs Latin glyphs), so baselines within
    /// this distance are treated as the same line.
    pub y_tolerance: f32,

    /// Horizontal tolerance: gaps below this are extraction artifacts
    /// and the words are merged; also the slack for header-merge
    /// span alignment.
    pub x_tolerance: f32,

    /// Approximate character width at normal font size
    pub char_width: f32,

    /// Approximate character height at normal font size
    pub char_height: f32,

    /// Whether to attempt two-column page splitting
    pub split_columns: bool,

    /// Whether document-level extraction processes pages in parallel
    pub parallel: bool,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical row-clustering tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.y_tolerance = tolerance;
        self
    }

    /// Set the horizontal merge/alignment tolerance.
    pub fn with_x_tolerance(mut self, tolerance: f32) -> Self {
        self.x_tolerance = tolerance;
        self
    }

    /// Set the nominal character width.
    pub fn with_char_width(mut self, width: f32) -> Self {
        self.char_width = width;
        self
    }

    /// Set the nominal character height.
    pub fn with_char_height(mut self, height: f32) -> Self {
        self.char_height = height;
        self
    }

    /// Disable two-column page splitting.
    pub fn single_column(mut self) -> Self {
        self.split_columns = false;
        self
    }

    /// Disable parallel page processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Nominal line height: character height plus leading.
    pub fn line_height(&self) -> f32 {
        self.char_height + 10.0
    }

    /// Maximum distance a split-column group's inner edge may sit from
    /// the page center before the split is rejected.
    pub fn split_slack(&self) -> f32 {
        self.char_width * 2.0
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            y_tolerance: 2.0,
            x_tolerance: 5.0,
            char_width: 10.0,
            char_height: 10.0,
            split_columns: true,
            parallel: true,
        }
    }
}
