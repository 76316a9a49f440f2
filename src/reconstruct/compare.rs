//! Row-structure comparison: decides whether two adjacent rows belong to
//! the same table.

use super::config::ExtractOptions;
use super::rows::Row;

/// Result of comparing two rows for structural compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCompat {
    /// The rows can be consecutive rows of the same table
    Compatible,
    /// The rows belong to different tables
    Incompatible(IncompatReason),
}

impl RowCompat {
    /// Check whether the rows were judged compatible.
    pub fn is_compatible(&self) -> bool {
        matches!(self, RowCompat::Compatible)
    }
}

/// Why two rows were judged incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompatReason {
    /// Vertical distance between the rows exceeds twice the nominal
    /// line height; likely different tables or intervening text
    RowGapExceeded,
    /// Cell counts differ by more than one
    ColumnCountMismatch,
    /// A cell overlaps two adjacent cells of the other row, so the rows
    /// cannot be aligned by column
    AmbiguousOverlap,
    /// A cell found no overlapping partner in the other row
    UnmatchedCell,
}

/// Compare two candidate-consecutive rows.
///
/// The vertical gap allows twice the line height because wrapped text in
/// a cell pushes the next row further down. Column alignment is tested
/// by matching each cell of the shorter row against the longer row via
/// horizontal bounding-box overlap; every short cell must find exactly
/// one partner.
pub fn compare_rows(a: &Row, b: &Row, options: &ExtractOptions) -> RowCompat {
    if (a.baseline() - b.baseline()).abs() > options.line_height() * 2.0 {
        return RowCompat::Incompatible(IncompatReason::RowGapExceeded);
    }

    if a.len().abs_diff(b.len()) > 1 {
        return RowCompat::Incompatible(IncompatReason::ColumnCountMismatch);
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    for cell in &shorter.words {
        let mut partners = 0;
        for (j, other) in longer.words.iter().enumerate() {
            if cell.h_overlap(other) {
                partners += 1;
                // Overlapping the right neighbor as well means the cell
                // sits across a column boundary
                if let Some(next) = longer.words.get(j + 1) {
                    if cell.h_overlap(next) {
                        return RowCompat::Incompatible(IncompatReason::AmbiguousOverlap);
                    }
                }
            }
        }
        if partners != 1 {
            return RowCompat::Incompatible(IncompatReason::UnmatchedCell);
        }
    }

    RowCompat::Compatible
}
