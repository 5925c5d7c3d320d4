// src/pipeline/survey.rs

//! Subjects of every catalog class, fetched concurrently.

use futures::{StreamExt, stream};
use serde::Serialize;

use crate::models::Subject;
use crate::services::SheetService;

/// Subjects found on one class sheet.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassSurvey {
    pub year: String,
    pub subjects: Vec<Subject>,
}

impl ClassSurvey {
    pub fn question_total(&self) -> usize {
        self.subjects.iter().map(|s| s.question_count).sum()
    }
}

/// Fetch every catalog class with at most `concurrency` sheets in flight.
///
/// Results come back in catalog order. A class whose sheet cannot be read
/// shows up with no subjects.
pub async fn run_survey(service: &SheetService, concurrency: usize) -> Vec<ClassSurvey> {
    let years = service.get_years();
    log::info!(
        "Surveying {} classes ({} at a time)",
        years.len(),
        concurrency.max(1)
    );

    stream::iter(years.iter().copied())
        .map(|year| async move {
            ClassSurvey {
                year: year.to_string(),
                subjects: service.get_subjects(year).await,
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}
