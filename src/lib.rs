// src/lib.rs

//! Gabarito sheet ingestion library
//!
//! Reads the login roster and per-class question layouts from a published
//! spreadsheet, with a time-based cache in front of the CSV export endpoint.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
