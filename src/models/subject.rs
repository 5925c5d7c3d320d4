//! Subject block data structure.

use serde::{Deserialize, Serialize};

/// A contiguous run of questions belonging to one subject of a class sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject label taken from the block's first DISCIPLINA cell
    pub name: String,

    /// Rows in the block with a valid "Q No"
    pub question_count: usize,

    /// "Q No" of the block's first row, or 1 when that row had none
    pub start_q: i64,
}

impl Subject {
    pub fn new(name: impl Into<String>, start_q: i64) -> Self {
        Self {
            name: name.into(),
            question_count: 0,
            start_q,
        }
    }

    /// Question numbers shown for this subject, assumed consecutive from
    /// `start_q`. Empty when the block has no numbered rows.
    pub fn question_numbers(&self) -> impl Iterator<Item = i64> + use<> {
        let start = self.start_q;
        let count = match self.last_q() {
            Some(last) => last - start + 1,
            None => 0,
        };
        (0..count).map(move |offset| start + offset)
    }

    /// Number of the last question, `None` for an empty block.
    pub fn last_q(&self) -> Option<i64> {
        let count = i64::try_from(self.question_count).ok()?;
        if count == 0 {
            return None;
        }
        self.start_q.checked_add(count - 1)
    }

    /// Format subject for display, e.g. `MATEMÁTICA (Q5-Q12)`.
    pub fn label(&self) -> String {
        match self.last_q() {
            Some(last) => format!("{} (Q{}-Q{})", self.name, self.start_q, last),
            None => format!("{} (no questions)", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_subject() -> Subject {
        Subject {
            name: "HISTÓRIA".to_string(),
            question_count: 4,
            start_q: 9,
        }
    }

    #[test]
    fn test_question_numbers() {
        let subject = sample_subject();
        assert_eq!(subject.question_numbers().collect::<Vec<_>>(), vec![9, 10, 11, 12]);
        assert_eq!(subject.last_q(), Some(12));
    }

    #[test]
    fn test_empty_subject_has_no_numbers() {
        let subject = Subject::new("ARTE", 3);
        assert_eq!(subject.question_numbers().count(), 0);
        assert_eq!(subject.last_q(), None);
        assert_eq!(subject.label(), "ARTE (no questions)");
    }

    #[test]
    fn test_label() {
        assert_eq!(sample_subject().label(), "HISTÓRIA (Q9-Q12)");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample_subject()).unwrap();
        assert_eq!(json["questionCount"], 4);
        assert_eq!(json["startQ"], 9);
    }
}
