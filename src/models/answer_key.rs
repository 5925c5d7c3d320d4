//! Answer key for one subject, and the submission built from it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Subject, UserRecord};

/// Multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub fn as_char(&self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
            Choice::C => 'C',
            Choice::D => 'D',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            _ => None,
        }
    }
}

impl FromStr for Choice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        let choice = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        };
        choice.ok_or_else(|| AppError::answer_key(format!("'{s}' is not one of A, B, C, D")))
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Answers being filled in for one subject.
#[derive(Debug, Clone)]
pub struct AnswerKey {
    subject: Subject,
    answers: BTreeMap<i64, Choice>,
}

impl AnswerKey {
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            answers: BTreeMap::new(),
        }
    }

    /// Fill the key from a compact string such as `"ABDC"`, one letter per
    /// question starting at the subject's first question. Whitespace is
    /// ignored.
    pub fn from_compact(subject: Subject, compact: &str) -> Result<Self> {
        let mut key = Self::new(subject);
        let letters: Vec<char> = compact.chars().filter(|c| !c.is_whitespace()).collect();
        let numbers: Vec<i64> = key.subject.question_numbers().collect();
        if letters.len() > numbers.len() {
            return Err(AppError::answer_key(format!(
                "{} answers given for {} questions",
                letters.len(),
                numbers.len()
            )));
        }
        for (q, letter) in numbers.into_iter().zip(letters) {
            let choice = Choice::from_char(letter).ok_or_else(|| {
                AppError::answer_key(format!("question {q}: '{letter}' is not one of A, B, C, D"))
            })?;
            key.record(q, choice)?;
        }
        Ok(key)
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Set the answer for question `q`, replacing any earlier choice.
    pub fn record(&mut self, q: i64, choice: Choice) -> Result<()> {
        let in_range = self
            .subject
            .last_q()
            .is_some_and(|last| (self.subject.start_q..=last).contains(&q));
        if !in_range {
            return Err(AppError::answer_key(format!(
                "question {q} is not part of {}",
                self.subject.label()
            )));
        }
        self.answers.insert(q, choice);
        Ok(())
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Question numbers still without an answer.
    pub fn missing(&self) -> Vec<i64> {
        self.subject
            .question_numbers()
            .filter(|q| !self.answers.contains_key(q))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.subject.question_count
    }

    /// Seal the key into a submission. Every question must be answered.
    pub fn submit(self, user: &UserRecord, year: &str) -> Result<Submission> {
        if !self.is_complete() {
            return Err(AppError::answer_key(format!(
                "answered {} of {} questions",
                self.answered(),
                self.subject.question_count
            )));
        }
        Ok(Submission {
            masp: user.masp.clone(),
            teacher_name: user.name.clone(),
            year: year.to_string(),
            subject: self.subject.name,
            answers: self.answers,
            timestamp: Utc::now(),
        })
    }
}

/// A completed answer key, ready to be handed to whatever stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    pub masp: String,
    pub teacher_name: String,
    pub year: String,
    pub subject: String,
    pub answers: BTreeMap<i64, Choice>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math() -> Subject {
        Subject {
            name: "MATEMÁTICA".to_string(),
            question_count: 3,
            start_q: 5,
        }
    }

    fn ana() -> UserRecord {
        UserRecord::new("100", "Ana")
    }

    #[test]
    fn test_choice_from_str() {
        assert_eq!("b".parse::<Choice>().unwrap(), Choice::B);
        assert_eq!(" D ".parse::<Choice>().unwrap(), Choice::D);
        assert!("E".parse::<Choice>().is_err());
        assert!("AB".parse::<Choice>().is_err());
    }

    #[test]
    fn test_record_rejects_out_of_range() {
        let mut key = AnswerKey::new(math());
        assert!(key.record(4, Choice::A).is_err());
        assert!(key.record(8, Choice::A).is_err());
        assert!(key.record(7, Choice::A).is_ok());
    }

    #[test]
    fn test_missing_and_incomplete_submit() {
        let mut key = AnswerKey::new(math());
        key.record(5, Choice::C).unwrap();
        assert_eq!(key.missing(), vec![6, 7]);
        assert!(!key.is_complete());

        let err = key.submit(&ana(), "6-ANO").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Answer key error: answered 1 of 3 questions"
        );
    }

    #[test]
    fn test_rerecord_replaces_answer() {
        let mut key = AnswerKey::new(math());
        key.record(5, Choice::A).unwrap();
        key.record(5, Choice::B).unwrap();
        assert_eq!(key.answered(), 1);
    }

    #[test]
    fn test_from_compact_and_submit() {
        let key = AnswerKey::from_compact(math(), "a c d").unwrap();
        assert!(key.is_complete());

        let submission = key.submit(&ana(), "6-ANO").unwrap();
        assert_eq!(submission.masp, "100");
        assert_eq!(submission.teacher_name, "Ana");
        assert_eq!(submission.subject, "MATEMÁTICA");
        assert_eq!(submission.answers.get(&6), Some(&Choice::C));
    }

    #[test]
    fn test_from_compact_rejects_extra_and_bad_letters() {
        assert!(AnswerKey::from_compact(math(), "ABCD").is_err());
        assert!(AnswerKey::from_compact(math(), "AXB").is_err());
    }
}
