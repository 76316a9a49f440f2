//! End-to-end tests for the reconstruction pipeline.

use retable::{
    extract_document_tables, extract_page_tables, ExtractOptions, Page, Word,
};

fn make_word(text: &str, x0: f32, x1: f32, bottom: f32) -> Word {
    Word::new(text, x0, x1, bottom - 10.0, bottom)
}

/// Three rows of two aligned columns, 12pt apart, become one 3x2 table.
#[test]
fn single_table_three_rows_two_columns() {
    let mut page = Page::new(600.0, 800.0);
    for i in 0..3 {
        let y = 100.0 + i as f32 * 12.0;
        page.words.push(make_word("label", 10.0, 60.0, y));
        page.words.push(make_word("42", 200.0, 220.0, y));
    }

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count(), 3);
    assert_eq!(tables[0].column_count(), 2);
    for row in &tables[0].rows {
        assert_eq!(row, &vec!["label".to_string(), "42".to_string()]);
    }
}

/// Every row's rightmost word crosses the page center, so the page is
/// never judged as two-column.
#[test]
fn center_straddling_rows_reject_split() {
    let mut page = Page::new(600.0, 800.0);
    for i in 0..4 {
        let y = 100.0 + i as f32 * 12.0;
        page.words.push(make_word("item", 10.0, 60.0, y));
        // 250..350 straddles center 300
        page.words.push(make_word("wide-value", 250.0, 350.0, y));
    }

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    // Whole-page fallback still reconstructs the single table
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count(), 4);
}

/// A one-cell year row merges with the following month/day row and
/// heads the resulting table instead of forming its own block.
#[test]
fn year_header_merges_into_following_row() {
    let mut page = Page::new(600.0, 800.0);
    page.words.push(make_word("2023年", 100.0, 150.0, 50.0));
    page.words.push(make_word("3月31日", 98.0, 148.0, 62.0));
    page.words.push(make_word("1000", 300.0, 340.0, 62.0));
    page.words.push(make_word("收入", 98.0, 138.0, 74.0));
    page.words.push(make_word("2000", 300.0, 340.0, 74.0));

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count(), 2);
    assert_eq!(
        tables[0].rows[0],
        vec!["2023年3月31日".to_string(), "1000".to_string()]
    );
}

/// A row missing its middle column gets an empty cell inserted there.
#[test]
fn missing_middle_column_is_padded() {
    let mut page = Page::new(600.0, 800.0);
    let columns = [(10.0, 50.0), (100.0, 150.0), (200.0, 240.0)];
    for (i, texts) in [
        vec!["科目", "附注", "金额"],
        vec!["收入", "一", "1000"],
    ]
    .iter()
    .enumerate()
    {
        let y = 100.0 + i as f32 * 12.0;
        for (j, text) in texts.iter().enumerate() {
            let (x0, x1) = columns[j];
            page.words.push(make_word(text, x0, x1, y));
        }
    }
    // Third row skips the middle column
    page.words.push(make_word("合计", 10.0, 50.0, 124.0));
    page.words.push(make_word("3000", 200.0, 240.0, 124.0));

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].row_count(), 3);
    for row in &tables[0].rows {
        assert_eq!(row.len(), 3);
    }
    assert_eq!(
        tables[0].rows[2],
        vec!["合计".to_string(), String::new(), "3000".to_string()]
    );
    assert!(!tables[0].low_confidence);
}

/// A genuinely split page yields the left table followed by the right
/// table, each reconstructed independently.
#[test]
fn split_page_yields_two_tables() {
    let mut page = Page::new(600.0, 800.0);
    for i in 0..3 {
        let y = 100.0 + i as f32 * 12.0;
        // Left side: ends just short of center 300
        page.words.push(make_word("l-label", 20.0, 80.0, y));
        page.words.push(make_word("l-val", 240.0, 290.0, y));
        // Right side: starts just past center
        page.words.push(make_word("r-label", 310.0, 370.0, y));
        page.words.push(make_word("r-val", 520.0, 580.0, y));
    }

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].rows[0][0], "l-label");
    assert_eq!(tables[1].rows[0][0], "r-label");
}

/// A split page with a compound header on each side behaves as two
/// independent single-column pipelines.
#[test]
fn split_page_with_year_headers_runs_both_sides() {
    let mut page = Page::new(600.0, 800.0);

    // Left side: year header over month/day, data below
    page.words.push(make_word("2023年", 230.0, 280.0, 50.0));
    page.words.push(make_word("12月31日", 232.0, 282.0, 62.0));
    page.words.push(make_word("资产", 20.0, 60.0, 62.0));
    page.words.push(make_word("现金", 20.0, 60.0, 74.0));
    page.words.push(make_word("1000", 240.0, 280.0, 74.0));
    page.words.push(make_word("应收", 20.0, 60.0, 86.0));
    page.words.push(make_word("900", 240.0, 270.0, 86.0));

    // Right side: its own year header and data
    page.words.push(make_word("2022年", 530.0, 580.0, 50.0));
    page.words.push(make_word("12月31日", 532.0, 582.0, 62.0));
    page.words.push(make_word("负债", 310.0, 350.0, 62.0));
    page.words.push(make_word("借款", 310.0, 350.0, 74.0));
    page.words.push(make_word("500", 540.0, 570.0, 74.0));
    page.words.push(make_word("票据", 310.0, 350.0, 86.0));
    page.words.push(make_word("400", 540.0, 570.0, 86.0));

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 2);

    assert_eq!(
        tables[0].rows[0],
        vec!["资产".to_string(), "2023年12月31日".to_string()]
    );
    assert_eq!(tables[0].rows[1], vec!["现金".to_string(), "1000".to_string()]);

    assert_eq!(
        tables[1].rows[0],
        vec!["负债".to_string(), "2022年12月31日".to_string()]
    );
    assert_eq!(tables[1].rows[1], vec!["借款".to_string(), "500".to_string()]);
}

/// Sideways margin text must not disturb reconstruction.
#[test]
fn sideways_words_are_ignored() {
    let mut page = Page::new(600.0, 800.0);
    for i in 0..3 {
        let y = 100.0 + i as f32 * 12.0;
        page.words.push(make_word("a", 10.0, 50.0, y));
        page.words.push(make_word("b", 200.0, 240.0, y));
    }
    let mut margin = make_word("竖排页边说明文字", 590.0, 598.0, 110.0);
    margin.upright = false;
    page.words.push(margin);

    let tables = extract_page_tables(&page, &ExtractOptions::default());
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].column_count(), 2);
}

/// Document-level extraction keeps the page-index keys.
#[test]
fn document_mapping_preserves_page_indices() {
    let mut filled = Page::new(600.0, 800.0);
    for i in 0..2 {
        let y = 100.0 + i as f32 * 12.0;
        filled.words.push(make_word("x", 10.0, 50.0, y));
        filled.words.push(make_word("y", 200.0, 240.0, y));
    }
    let pages = vec![Page::new(600.0, 800.0), filled];

    let tables = extract_document_tables(&pages, &ExtractOptions::default());
    assert_eq!(tables.len(), 2);
    assert!(tables[&0].is_empty());
    assert_eq!(tables[&1].len(), 1);
}
