//! The reconstruction pipeline.
//!
//! Words are repaired and clustered into rows, the page is checked for a
//! two-column layout, and each resulting row group is segmented into
//! tables and aligned to a uniform column count. All stages degrade
//! gracefully on malformed geometry; nothing in here returns an error.

mod align;
mod compare;
mod config;
mod header;
mod rows;
mod segment;
mod split;

pub use align::align_table;
pub use compare::{compare_rows, IncompatReason, RowCompat};
pub use config::ExtractOptions;
pub use header::HeaderMerger;
pub use rows::{build_rows, merge_split_words, Row};
pub use segment::segment_rows;
pub use split::{split_columns, SplitOutcome, SplitRejection};

use regex::Regex;

use crate::model::{Page, Table, Word};

/// Drives the full pipeline for single pages.
pub struct Reconstructor {
    options: ExtractOptions,
    merger: HeaderMerger,
    cid_placeholder: Regex,
}

impl Reconstructor {
    /// Create a reconstructor with default options.
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    /// Create a reconstructor with custom options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self {
            options,
            merger: HeaderMerger::new(),
            cid_placeholder: Regex::new(r"\(cid:\d+\)").unwrap(),
        }
    }

    /// The active options.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Reconstruct all tables on one page.
    pub fn page_tables(&self, page: &Page) -> Vec<Table> {
        let words = self.filter_words(&page.words);
        if words.is_empty() {
            return Vec::new();
        }

        let rows: Vec<Row> = build_rows(words, &self.options)
            .into_iter()
            .filter(|r| !r.is_empty())
            .collect();

        if self.options.split_columns {
            if let SplitOutcome::Split { left, right } = split_columns(page.width, &rows, &self.options)
            {
                log::debug!(
                    "page split into {} left and {} right rows",
                    left.len(),
                    right.len()
                );
                let mut tables = self.extract_group(left);
                tables.extend(self.extract_group(right));
                return tables;
            }
        }

        self.extract_group(rows)
    }

    /// Segment one row group into tables and align each.
    fn extract_group(&self, rows: Vec<Row>) -> Vec<Table> {
        segment_rows(rows, &self.merger, &self.options)
            .into_iter()
            .map(align_table)
            .collect()
    }

    /// Drop sideways words and unresolved glyph placeholders.
    ///
    /// Vertical margin text would otherwise be clustered into rows and
    /// confuse the column tests; `(cid:N)` text means the extractor
    /// could not map a glyph and carries no content.
    fn filter_words(&self, words: &[Word]) -> Vec<Word> {
        words
            .iter()
            .filter(|w| w.upright && !self.cid_placeholder.is_match(&w.text))
            .cloned()
            .collect()
    }
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new()
    }
}
