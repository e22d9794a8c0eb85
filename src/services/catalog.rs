use crate::models::{CatalogSnapshot, Service, StylistProfile};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching catalogs from the salon backend
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Salon backend catalog client
///
/// Reads the service and stylist catalogs. Both endpoints return either a
/// bare JSON array or a `{"documents": [...]}` envelope.
pub struct CatalogClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full service catalog
    pub async fn fetch_services(&self) -> Result<Vec<Service>, CatalogError> {
        self.fetch_collection("services").await
    }

    /// Fetch the full stylist catalog
    pub async fn fetch_stylists(&self) -> Result<Vec<StylistProfile>, CatalogError> {
        self.fetch_collection("stylists").await
    }

    /// Fetch both catalogs concurrently
    pub async fn fetch_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        let (services, stylists) = tokio::try_join!(self.fetch_services(), self.fetch_stylists())?;

        tracing::info!(
            "Fetched catalog snapshot: {} services, {} stylists",
            services.len(),
            stylists.len()
        );

        Ok(CatalogSnapshot { services, stylists })
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), collection);

        tracing::debug!("Fetching {} from: {}", collection, url);

        let mut request = self.client.get(&url);
        if let Some(api_key) = &self.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CatalogError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch {}: {} - {}", collection, status, body);
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch {}: {}",
                collection, status
            )));
        }

        let json: Value = response.json().await?;
        parse_collection(json, collection)
    }
}

/// Decode a collection body, accepting a bare array or a documents envelope
fn parse_collection<T: DeserializeOwned>(json: Value, collection: &str) -> Result<Vec<T>, CatalogError> {
    let documents = match json {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("documents") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(CatalogError::InvalidResponse(
                    "Missing documents array".into(),
                ))
            }
        },
        _ => {
            return Err(CatalogError::InvalidResponse(format!(
                "Expected array of {}",
                collection
            )))
        }
    };

    documents
        .into_iter()
        .map(|doc| {
            // Documents may wrap their fields in a `data` object
            let data = match doc {
                Value::Object(mut obj) if obj.contains_key("data") => {
                    obj.remove("data").unwrap_or(Value::Null)
                }
                other => other,
            };
            serde_json::from_value(data).map_err(|e| {
                CatalogError::InvalidResponse(format!("Failed to parse {}: {}", collection, e))
            })
        })
        .collect()
}
