// src/models/mod.rs

//! Domain models for the sheet ingestion library.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod answer_key;
mod config;
mod row;
mod subject;
mod user;
mod year;

// Re-export all public types
pub use answer_key::{AnswerKey, Choice, Submission};
pub use config::{CacheConfig, Config, HttpConfig, LoggingConfig, SheetsConfig};
pub use row::Row;
pub use subject::Subject;
pub use user::UserRecord;
pub use year::{Category, CategoryGroup, Unit, UnitGroup, YearClass};
