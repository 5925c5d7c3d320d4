// src/services/sheets.rs

//! Sheet service: the entry points the answer-key screens consume.
//!
//! Every sheet read goes through the injected cache first. Failures never
//! reach the caller of `get_users` / `get_subjects`; they degrade to empty
//! results and are logged.

use std::sync::Arc;

use chrono::{TimeDelta, Utc};

use crate::error::Result;
use crate::models::{Config, Row, Subject, UserRecord};
use crate::services::cache::SheetCache;
use crate::services::catalog::YearCatalog;
use crate::services::roster::{extract_users, find_user};
use crate::services::segmenter::segment_subjects;
use crate::services::source::SheetSource;
use crate::utils::csv::parse_rows;

/// Reads the roster and class sheets through a shared cache.
pub struct SheetService {
    source: Arc<dyn SheetSource>,
    cache: Arc<dyn SheetCache>,
    ttl: TimeDelta,
    login_sheet: String,
    catalog: YearCatalog,
}

impl SheetService {
    /// Create a service over `source`, sharing `cache` with any other holder.
    ///
    /// Fails when the built-in class catalog does not validate.
    pub fn new(
        source: Arc<dyn SheetSource>,
        cache: Arc<dyn SheetCache>,
        config: &Config,
    ) -> Result<Self> {
        Ok(Self {
            source,
            cache,
            ttl: config.cache.ttl(),
            login_sheet: config.sheets.login_sheet.clone(),
            catalog: YearCatalog::new()?,
        })
    }

    /// Rows of `sheet`, from cache when fresh. Empty on any failure.
    pub async fn fetch_sheet(&self, sheet: &str) -> Arc<[Row]> {
        match self.try_fetch_sheet(sheet).await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("Error fetching sheet {}: {}", sheet, e);
                Arc::from(Vec::new())
            }
        }
    }

    /// Rows of `sheet`, from cache when fresh, reporting failures.
    ///
    /// Only successful fetches are cached, so a failure is retried on the
    /// next call. Concurrent misses each fetch; the last write wins.
    pub async fn try_fetch_sheet(&self, sheet: &str) -> Result<Arc<[Row]>> {
        let now = Utc::now();
        if let Some(entry) = self.cache.get(sheet) {
            if entry.is_fresh(now, self.ttl) {
                log::debug!("Cache hit for sheet '{}'", sheet);
                return Ok(entry.rows);
            }
            log::debug!("Cache entry for sheet '{}' expired", sheet);
        }

        let body = self.source.fetch_csv(sheet).await?;
        let rows: Arc<[Row]> = parse_rows(&body)?.into();
        log::debug!("Fetched sheet '{}' ({} rows)", sheet, rows.len());

        self.cache.set(sheet, Arc::clone(&rows), Utc::now());
        Ok(rows)
    }

    /// Teachers listed on the roster sheet.
    pub async fn get_users(&self) -> Vec<UserRecord> {
        let rows = self.fetch_sheet(&self.login_sheet).await;
        extract_users(&rows)
    }

    /// Roster entry for `masp`, first match wins.
    pub async fn find_user(&self, masp: &str) -> Option<UserRecord> {
        let users = self.get_users().await;
        find_user(&users, masp).cloned()
    }

    /// Class identifiers, in display order. No I/O.
    pub fn get_years(&self) -> &'static [&'static str] {
        self.catalog.years()
    }

    pub fn catalog(&self) -> &YearCatalog {
        &self.catalog
    }

    /// Subject blocks of the class sheet named `year`.
    pub async fn get_subjects(&self, year: &str) -> Vec<Subject> {
        if !self.catalog.contains(year) {
            log::debug!("Sheet '{}' is not a catalog class", year);
        }
        let rows = self.fetch_sheet(year).await;
        segment_subjects(&rows)
    }
}
