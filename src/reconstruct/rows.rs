//! Row building: clustering words into horizontal lines and repairing
//! word-level extraction artifacts.

use crate::model::Word;

use super::config::ExtractOptions;

/// A horizontal line of words, ordered left to right.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Words in this row, sorted by `x0`
    pub words: Vec<Word>,
}

impl Row {
    /// Create a row from words.
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The row's reference baseline: the bottom of its first word.
    pub fn baseline(&self) -> f32 {
        self.words.first().map(|w| w.bottom).unwrap_or(0.0)
    }

    /// Number of words (cells) in the row.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the row has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The cell texts of this row, left to right.
    pub fn texts(&self) -> Vec<String> {
        self.words.iter().map(|w| w.text.clone()).collect()
    }
}

/// Cluster words into rows by baseline proximity.
///
/// Words are sorted by their bottom coordinate; a word joins the current
/// row iff its baseline is within `y_tolerance` of the last word added,
/// otherwise a new row starts. Each row is then re-sorted left to right
/// and passed through [`merge_split_words`].
///
/// An empty input yields a single empty row; callers filter empty rows.
pub fn build_rows(mut words: Vec<Word>, options: &ExtractOptions) -> Vec<Row> {
    words.sort_by(|a, b| {
        a.bottom
            .partial_cmp(&b.bottom)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut rows: Vec<Row> = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut last_bottom: Option<f32> = None;

    for word in words {
        if let Some(bottom) = last_bottom {
            if (bottom - word.bottom).abs() > options.y_tolerance {
                rows.push(Row::new(std::mem::take(&mut current)));
            }
        }
        last_bottom = Some(word.bottom);
        current.push(word);
    }
    rows.push(Row::new(current));

    rows.into_iter()
        .map(|mut row| {
            row.words.sort_by(|a, b| {
                a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal)
            });
            merge_split_words(row, options)
        })
        .collect()
}

/// Repair mis-split words in a row.
///
/// Extractors sometimes break one word in two, or report the end of one
/// word overlapping the start of the next. Any word whose gap to the
/// previous word of the input row is below `x_tolerance` is folded into
/// the previously emitted word: text concatenated, right edge extended.
pub fn merge_split_words(row: Row, options: &ExtractOptions) -> Row {
    let mut merged: Vec<Word> = Vec::with_capacity(row.words.len());

    for (i, word) in row.words.iter().enumerate() {
        if i != 0 && word.x0 - row.words[i - 1].x1 < options.x_tolerance {
            // Fold into the previous output word; a negative gap
            // (overlap) merges as well.
            let prev = merged
                .last_mut()
                .expect("merge target exists for non-first word");
            prev.x1 = word.x1;
            prev.text.push_str(&word.text);
        } else {
            merged.push(word.clone());
        }
    }

    Row::new(merged)
}
