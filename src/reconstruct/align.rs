//! Table alignment: padding rows to a uniform column count.
//!
//! Rows of the same table may miss a column that other rows have (a
//! notes column left blank, say). Such rows get an empty cell inserted
//! at the missing position, located by bounding-box overlap against the
//! widest row. Rows missing more than one column are structurally
//! anomalous and are dropped from the table.

use crate::model::Table;

use super::rows::Row;

/// Align a segmented table block to a uniform column count and reduce
/// it to plain text cells.
pub fn align_table(rows: Vec<Row>) -> Table {
    let max_len = rows.iter().map(Row::len).max().unwrap_or(0);
    let min_len = rows.iter().map(Row::len).min().unwrap_or(0);

    if max_len == min_len {
        return Table::new(rows.iter().map(Row::texts).collect());
    }

    let max_row = rows
        .iter()
        .find(|r| r.len() == max_len)
        .cloned()
        .expect("a row with the maximum cell count exists");

    // Rows more than one column short cannot be aligned reliably
    let rows: Vec<Row> = if max_len - min_len > 1 {
        rows.into_iter().filter(|r| max_len - r.len() <= 1).collect()
    } else {
        rows
    };

    let mut low_confidence = false;
    let aligned: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            if row.len() + 1 == max_len {
                match pad_missing_column(row, &max_row) {
                    Ok(padded) => padded.texts(),
                    Err(unpadded) => {
                        log::warn!(
                            "no missing column found for short row {:?}; passing through",
                            unpadded.texts()
                        );
                        low_confidence = true;
                        unpadded.texts()
                    }
                }
            } else {
                row.texts()
            }
        })
        .collect();

    let mut table = Table::new(aligned);
    table.low_confidence = low_confidence;
    table
}

/// Insert an empty cell at the first column of `max_row` that no cell of
/// `row` overlaps. Errors with the row unchanged when every column is
/// already occupied, which contradicts the deficit and indicates
/// anomalous geometry.
fn pad_missing_column(mut row: Row, max_row: &Row) -> Result<Row, Row> {
    for (i, column) in max_row.words.iter().enumerate() {
        let occupied = row.words.iter().any(|w| column.h_overlap(w));
        if !occupied {
            row.words.insert(i, column.as_filler());
            return Ok(row);
        }
    }
    Err(row)
}
