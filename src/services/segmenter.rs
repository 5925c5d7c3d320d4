// src/services/segmenter.rs

//! Subject block segmentation.
//!
//! Class sheets list one question per row. The DISCIPLINA cell is merged
//! across a subject's rows in the source spreadsheet, so the export carries
//! the label on the block's first row only and leaves the rest blank. Blocks
//! are recovered in a single pass with one open accumulator.

use crate::models::{Row, Subject};
use crate::utils::parse_leading_int;

/// Column holding the question number.
pub const QUESTION_COLUMN: &str = "Q No";

/// Column holding the subject label on a block's first row.
pub const SUBJECT_COLUMN: &str = "DISCIPLINA";

/// Split class-sheet rows into subject blocks, in sheet order.
///
/// A row with a non-blank DISCIPLINA closes the open block and starts a new
/// one at its own "Q No" (1 when that is not a number). Every row with a
/// numeric "Q No" counts toward the open block, the starting row included.
/// Rows before the first labelled row belong to no block.
pub fn segment_subjects(rows: &[Row]) -> Vec<Subject> {
    let mut subjects = Vec::new();
    let mut current: Option<Subject> = None;
    let mut orphaned = 0usize;

    for row in rows {
        let q = row.get(QUESTION_COLUMN).and_then(parse_leading_int);

        if let Some(name) = row.get_trimmed(SUBJECT_COLUMN) {
            subjects.extend(current.take());
            current = Some(Subject::new(name, q.unwrap_or(1)));
        }

        match (q, current.as_mut()) {
            (Some(_), Some(subject)) => subject.question_count += 1,
            (Some(_), None) => orphaned += 1,
            _ => {}
        }
    }
    subjects.extend(current);

    if orphaned > 0 {
        log::debug!(
            "{} numbered rows precede the first {} label and were skipped",
            orphaned,
            SUBJECT_COLUMN
        );
    }

    subjects
}
