//! Two-column page detection.
//!
//! Some financial reports lay out two independent tables side by side.
//! Rows are partitioned around the page's horizontal center and the
//! split is validated against the median inner edges of both groups, so
//! that ordinary full-width pages are not misjudged as split.

use super::config::ExtractOptions;
use super::rows::Row;

/// Outcome of the column-split detection.
#[derive(Debug, Clone)]
pub enum SplitOutcome {
    /// The page holds two independent side-by-side groups; each is
    /// processed downstream as its own page.
    Split {
        /// Rows entirely left of center
        left: Vec<Row>,
        /// Rows entirely right of center
        right: Vec<Row>,
    },
    /// The page is a single column; the caller falls back to
    /// whole-page processing.
    NotSplit(SplitRejection),
}

impl SplitOutcome {
    /// Check whether a split was detected.
    pub fn is_split(&self) -> bool {
        matches!(self, SplitOutcome::Split { .. })
    }
}

/// Why a candidate split was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRejection {
    /// Neither side collected any rows
    NoSideRows,
    /// The left group's median right edge sits too far from center
    LeftEdgeTooFar,
    /// The right group's median left edge sits too far from center
    RightEdgeTooFar,
}

/// Partition rows into left/right groups around the page center.
///
/// Rows containing a word that straddles the center are discarded from
/// candidacy: such a row shows the page is not split at that line. A
/// genuinely split page has the left group's right boundary and the
/// right group's left boundary both hugging the center; the median of
/// each edge set must lie within [`ExtractOptions::split_slack`] of
/// center or the split is rejected.
pub fn split_columns(page_width: f32, rows: &[Row], options: &ExtractOptions) -> SplitOutcome {
    let center = page_width / 2.0;

    let mut left_rows: Vec<Row> = Vec::new();
    let mut right_rows: Vec<Row> = Vec::new();

    for row in rows {
        if row.words.iter().any(|w| w.x0 < center && w.x1 > center) {
            continue;
        }

        let left: Vec<_> = row.words.iter().filter(|w| w.x1 < center).cloned().collect();
        let right: Vec<_> = row.words.iter().filter(|w| w.x0 > center).cloned().collect();

        if !left.is_empty() {
            left_rows.push(Row::new(left));
        }
        if !right.is_empty() {
            right_rows.push(Row::new(right));
        }
    }

    if left_rows.is_empty() && right_rows.is_empty() {
        return SplitOutcome::NotSplit(SplitRejection::NoSideRows);
    }

    if !left_rows.is_empty() {
        let right_edges: Vec<f32> = left_rows
            .iter()
            .filter_map(|r| r.words.last().map(|w| w.x1))
            .collect();
        let median_right = median(&right_edges);
        if center - median_right > options.split_slack() {
            log::debug!(
                "split rejected: left median right edge {:.1} vs center {:.1}",
                median_right,
                center
            );
            return SplitOutcome::NotSplit(SplitRejection::LeftEdgeTooFar);
        }
    }

    if !right_rows.is_empty() {
        let left_edges: Vec<f32> = right_rows
            .iter()
            .filter_map(|r| r.words.first().map(|w| w.x0))
            .collect();
        let median_left = median(&left_edges);
        if median_left - center > options.split_slack() {
            log::debug!(
                "split rejected: right median left edge {:.1} vs center {:.1}",
                median_left,
                center
            );
            return SplitOutcome::NotSplit(SplitRejection::RightEdgeTooFar);
        }
    }

    SplitOutcome::Split {
        left: left_rows,
        right: right_rows,
    }
}

/// Median of a non-empty slice; even counts average the middle pair.
fn median(values: &[f32]) -> f32 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
