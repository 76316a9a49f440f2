//! # retable
//!
//! Reconstructs tables from positioned word tokens extracted from
//! document pages.
//!
//! Given the words of a page, each with its text and bounding box, this
//! library recovers the logical rows, columns, and distinct tables a
//! reader would perceive, including pages holding two independent
//! side-by-side tables (common in financial reports). PDF decoding,
//! glyph resolution, and word segmentation happen upstream; the word
//! dump is the input boundary.
//!
//! ## Quick Start
//!
//! ```
//! use retable::{extract_page_tables, ExtractOptions, Page, Word};
//!
//! let mut page = Page::new(600.0, 800.0);
//! for i in 0..3 {
//!     let y = 100.0 + i as f32 * 12.0;
//!     page.words.push(Word::new("item", 10.0, 50.0, y - 10.0, y));
//!     page.words.push(Word::new("1000", 200.0, 240.0, y - 10.0, y));
//! }
//!
//! let tables = extract_page_tables(&page, &ExtractOptions::default());
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].column_count(), 2);
//! ```
//!
//! ## Features
//!
//! - **Row clustering** with vertical-baseline tolerance and repair of
//!   mis-split words
//! - **Two-column page detection** with median-edge validation
//! - **Table segmentation** by structural similarity between rows
//! - **Compound header merging** (year row + month/day or quarter row)
//! - **Column alignment** padding short rows with empty cells
//! - **Parallel processing**: uses Rayon across multi-page documents

pub mod error;
pub mod model;
pub mod reconstruct;

pub use error::{Error, Result};
pub use model::{Page, Table, Word};
pub use reconstruct::{
    ExtractOptions, HeaderMerger, IncompatReason, Reconstructor, Row, RowCompat, SplitOutcome,
    SplitRejection,
};

use std::collections::BTreeMap;

use rayon::prelude::*;

/// Reconstruct all tables on a single page.
pub fn extract_page_tables(page: &Page, options: &ExtractOptions) -> Vec<Table> {
    Reconstructor::with_options(options.clone()).page_tables(page)
}

/// Reconstruct tables for every page of a document.
///
/// Returns a mapping from zero-based page index to that page's tables.
/// Pages are independent and are processed in parallel unless
/// [`ExtractOptions::sequential`] was set.
pub fn extract_document_tables(
    pages: &[Page],
    options: &ExtractOptions,
) -> BTreeMap<usize, Vec<Table>> {
    let reconstructor = Reconstructor::with_options(options.clone());

    if options.parallel {
        pages
            .par_iter()
            .enumerate()
            .map(|(i, page)| (i, reconstructor.page_tables(page)))
            .collect()
    } else {
        pages
            .iter()
            .enumerate()
            .map(|(i, page)| (i, reconstructor.page_tables(page)))
            .collect()
    }
}

/// Reconstruct tables for a single page of a document, by index.
///
/// # Errors
///
/// Returns [`Error::PageOutOfRange`] when `index` is not a valid page.
pub fn extract_document_page(
    pages: &[Page],
    index: usize,
    options: &ExtractOptions,
) -> Result<BTreeMap<usize, Vec<Table>>> {
    let page = pages
        .get(index)
        .ok_or(Error::PageOutOfRange(index, pages.len()))?;

    let mut result = BTreeMap::new();
    result.insert(index, extract_page_tables(page, options));
    Ok(result)
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Human-readable, indented
    Pretty,
    /// Single line
    Compact,
}

/// Serialize a page→tables mapping to JSON.
pub fn to_json(tables: &BTreeMap<usize, Vec<Table>>, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(tables)?,
        JsonFormat::Compact => serde_json::to_string(tables)?,
    };
    Ok(json)
}
