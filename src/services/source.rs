// src/services/source.rs

//! Remote sheet source.
//!
//! Performs one HTTP GET per sheet name against the spreadsheet's CSV
//! export endpoint.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::Result;
use crate::models::{Config, SheetsConfig};
use crate::utils::http;

/// Something that can hand out the raw CSV export of a named sheet.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Fetch the CSV export of `sheet` as undecoded bytes. Errors on
    /// transport failure or a non-success status.
    async fn fetch_csv(&self, sheet: &str) -> Result<Vec<u8>>;
}

/// Sheet source backed by the published spreadsheet over HTTP.
pub struct HttpSheetSource {
    client: Client,
    export_url: Url,
    edit_url: Url,
}

impl HttpSheetSource {
    /// Create a source using an existing client.
    pub fn new(client: Client, sheets: &SheetsConfig) -> Result<Self> {
        Ok(Self {
            client,
            export_url: sheets.export_url()?,
            edit_url: sheets.edit_url()?,
        })
    }

    /// Create a source with a client built from the HTTP settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = http::create_client(&config.http)?;
        Self::new(client, &config.sheets)
    }

    /// Export URL for one sheet, with the name URL-encoded.
    pub fn sheet_url(&self, sheet: &str) -> Url {
        let mut url = self.export_url.clone();
        url.query_pairs_mut().append_pair("sheet", sheet);
        url
    }

    /// Fetch the document's edit page, which lists its tab names.
    pub async fn fetch_document_html(&self) -> Result<String> {
        log::debug!("Fetching document page {}", self.edit_url);
        http::fetch_text(&self.client, self.edit_url.as_str(), "edit page").await
    }
}

#[async_trait]
impl SheetSource for HttpSheetSource {
    async fn fetch_csv(&self, sheet: &str) -> Result<Vec<u8>> {
        let url = self.sheet_url(sheet);
        log::debug!("Fetching sheet '{}' from {}", sheet, url);
        http::fetch_bytes(&self.client, url.as_str(), sheet).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpSheetSource {
        let sheets = SheetsConfig {
            base_url: "https://docs.google.com/spreadsheets/d".to_string(),
            document_id: "doc".to_string(),
            login_sheet: "Login".to_string(),
        };
        HttpSheetSource::new(Client::new(), &sheets).unwrap()
    }

    #[test]
    fn test_sheet_url_encodes_name() {
        let url = source().sheet_url("1-REG-NOT-M");
        assert_eq!(
            url.as_str(),
            "https://docs.google.com/spreadsheets/d/doc/gviz/tq?tqx=out%3Acsv&sheet=1-REG-NOT-M"
        );

        let url = source().sheet_url("Turma A/B");
        assert_eq!(
            url.query_pairs().find(|(k, _)| k == "sheet").map(|(_, v)| v.into_owned()),
            Some("Turma A/B".to_string())
        );
    }
}
