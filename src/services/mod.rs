//! Service layer for the sheet ingestion library.
//!
//! This module contains the business logic for:
//! - Fetching sheets over HTTP (`HttpSheetSource`)
//! - Caching parsed sheets (`MemoryCache`)
//! - Roster extraction and login lookup (`roster`)
//! - Subject block segmentation (`segmenter`)
//! - The static class catalog (`YearCatalog`)
//! - Sheet name discovery (`discovery`)
//! - The combined entry points (`SheetService`)

pub mod cache;
pub mod catalog;
pub mod discovery;
pub mod roster;
pub mod segmenter;
pub mod sheets;
pub mod source;

pub use cache::{CachedSheet, MemoryCache, SheetCache};
pub use catalog::{YEARS, YearCatalog};
pub use discovery::extract_sheet_names;
pub use roster::{duplicate_masps, extract_users, find_user};
pub use segmenter::segment_subjects;
pub use sheets::SheetService;
pub use source::{HttpSheetSource, SheetSource};
