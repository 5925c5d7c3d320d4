// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::{Client, Response};

use crate::error::{AppError, Result};
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// GET `url`, rejecting a non-success status as [`AppError::Status`] with
/// `label` naming what was requested.
async fn get_checked(client: &Client, url: &str, label: &str) -> Result<Response> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(label, status.as_u16()));
    }
    Ok(response)
}

/// GET `url` and return the body as text.
pub async fn fetch_text(client: &Client, url: &str, label: &str) -> Result<String> {
    Ok(get_checked(client, url, label).await?.text().await?)
}

/// GET `url` and return the raw body, leaving decoding to the caller.
pub async fn fetch_bytes(client: &Client, url: &str, label: &str) -> Result<Vec<u8>> {
    Ok(get_checked(client, url, label).await?.bytes().await?.to_vec())
}
