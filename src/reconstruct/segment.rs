//! Table segmentation: grouping consecutive structurally-similar rows
//! into distinct table blocks.

use super::compare::{compare_rows, RowCompat};
use super::config::ExtractOptions;
use super::header::HeaderMerger;
use super::rows::Row;

/// Walk the ordered rows and group them into table blocks.
///
/// Rows with a single cell are plain text, not table candidates, and are
/// dropped up front, except lone year cells, which may be the upper
/// half of a compound header. A block grows while each incoming row is
/// structurally compatible with the block's last row; an incompatible
/// row closes the block and starts a new one. Blocks of a single row are
/// discarded. When a block holds exactly one row and that row carries a
/// year marker, the header merger gets a chance to fold the incoming row
/// into it before compatibility is tested.
pub fn segment_rows(
    rows: Vec<Row>,
    merger: &HeaderMerger,
    options: &ExtractOptions,
) -> Vec<Vec<Row>> {
    let rows: Vec<Row> = rows
        .into_iter()
        .filter(|r| r.len() > 1 || (r.len() == 1 && merger.is_year_row(r)))
        .collect();

    let mut tables: Vec<Vec<Row>> = Vec::new();
    let mut block: Vec<Row> = Vec::new();

    for row in rows {
        if block.is_empty() {
            block.push(row);
            continue;
        }

        if block.len() == 1 && merger.is_year_row(&block[0]) {
            if let Some(merged) = merger.try_merge(&block[0], &row, options) {
                block[0] = merged;
                continue;
            }
        }

        match compare_rows(block.last().expect("non-empty block"), &row, options) {
            RowCompat::Compatible => block.push(row),
            RowCompat::Incompatible(reason) => {
                log::debug!("table boundary ({:?}) after {} rows", reason, block.len());
                if block.len() > 1 {
                    tables.push(std::mem::take(&mut block));
                } else {
                    block.clear();
                }
                block.push(row);
            }
        }
    }

    if block.len() > 1 {
        tables.push(block);
    }

    tables
}
