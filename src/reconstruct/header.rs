//! Compound header detection.
//!
//! Financial statements frequently spread one header over two physical
//! lines: a year line ("2023年") above a month/day or quarter line
//! ("3月31日", "第一季度"). Those fragments describe the same column and
//! are merged into a single header row before segmentation continues.

use regex::Regex;

use crate::model::Word;

use super::config::ExtractOptions;
use super::rows::Row;

/// Detects and merges year/period header fragments.
pub struct HeaderMerger {
    year: Regex,
    month_day: Regex,
    quarter: Regex,
}

impl HeaderMerger {
    /// Create a merger with the built-in header patterns.
    pub fn new() -> Self {
        Self {
            year: Regex::new(r"\d{4}年").unwrap(),
            month_day: Regex::new(r"^\d+月\d+日").unwrap(),
            quarter: Regex::new(r"^第\w+季度").unwrap(),
        }
    }

    /// Check whether any cell of the row carries a year marker.
    pub fn is_year_row(&self, row: &Row) -> bool {
        row.words.iter().any(|w| self.year.is_match(&w.text))
    }

    fn is_period_cell(&self, word: &Word) -> bool {
        self.month_day.is_match(&word.text) || self.quarter.is_match(&word.text)
    }

    /// Try to merge a year row with the following row.
    ///
    /// Each period cell of `next` whose horizontal span aligns with a
    /// year cell (either edge within `x_tolerance`) gets that year text
    /// prepended. Returns the merged row as a new value, or `None` when
    /// nothing aligned; `next` is never modified in place.
    pub fn try_merge(&self, year_row: &Row, next: &Row, options: &ExtractOptions) -> Option<Row> {
        let mut merged_any = false;
        let mut cells: Vec<Word> = next.words.clone();

        for year_cell in &year_row.words {
            for cell in cells.iter_mut() {
                if !self.is_period_cell(cell) {
                    continue;
                }
                if (year_cell.x1 - cell.x1).abs() < options.x_tolerance
                    || (year_cell.x0 - cell.x0).abs() < options.x_tolerance
                {
                    cell.text = format!("{}{}", year_cell.text, cell.text);
                    merged_any = true;
                }
            }
        }

        if merged_any {
            let merged = Row::new(cells);
            log::debug!("merged year header into period row: {:?}", merged.texts());
            Some(merged)
        } else {
            None
        }
    }
}

impl Default for HeaderMerger {
    fn default() -> Self {
        Self::new()
    }
}
