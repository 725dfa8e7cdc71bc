//! HTTP client for the sales records API.

use crate::models::{RecordId, SalesRecord, SalesRecordData};
use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Address the server listens on with the default settings.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5251";

/// Calls the five record endpoints.
#[derive(Debug, Clone)]
pub struct SalesClient {
    base_url: String,
    client: Client,
}

impl SalesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_all_records(&self) -> Result<Vec<SalesRecord>> {
        let response = self
            .client
            .get(self.url("/gets"))
            .send()
            .await
            .context("Failed to send GET request")?;

        parse_json(response).await
    }

    /// Returns `None` when the server has no record with this id.
    pub async fn get_record(&self, id: RecordId) -> Result<Option<SalesRecord>> {
        let response = self
            .client
            .get(self.url(&format!("/get/{}", id)))
            .send()
            .await
            .context("Failed to send GET request")?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        parse_json(response).await.map(Some)
    }

    pub async fn create_record(&self, data: &SalesRecordData) -> Result<SalesRecord> {
        let response = self
            .client
            .post(self.url("/create"))
            .json(data)
            .send()
            .await
            .context("Failed to send POST request")?;

        parse_json(response).await
    }

    /// Returns whether the server accepted the update.
    pub async fn update_record(&self, id: RecordId, data: &SalesRecordData) -> Result<bool> {
        let response = self
            .client
            .put(self.url(&format!("/updates/{}", id)))
            .json(data)
            .send()
            .await
            .context("Failed to send PUT request")?;

        Ok(response.status().is_success())
    }

    /// Returns whether the server deleted the record.
    pub async fn delete_record(&self, id: RecordId) -> Result<bool> {
        let response = self
            .client
            .delete(self.url(&format!("/deletes/{}", id)))
            .send()
            .await
            .context("Failed to send DELETE request")?;

        Ok(response.status().is_success())
    }
}

impl Default for SalesClient {
    fn default() -> Self {
        SalesClient::new(DEFAULT_BASE_URL)
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "HTTP {} {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            error_text
        );
    }

    response
        .json()
        .await
        .context("Failed to parse JSON response")
}
