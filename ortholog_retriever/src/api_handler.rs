// src/api_handler.rs

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

pub const ENSEMBL_BASE_URL: &str = "https://rest.ensembl.org";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },
    #[error("unexpected response shape from {url}: {detail}")]
    Shape { url: String, detail: String },
}

pub struct EnsemblClient {
    client: Client,
    base_url: String,
}

impl EnsemblClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("ortholog_retriever/0.1"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// GET an endpoint and return the JSON body. Non-2xx responses become
    /// `ApiError::Status` carrying the body's `error` field when the
    /// service sends one (Ensembl error bodies are `{"error": "..."}`),
    /// otherwise the raw body text.
    pub fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .map_err(|source| ApiError::Transport { url, source })
        } else {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or(body);
            Err(ApiError::Status {
                url,
                status,
                message,
            })
        }
    }
}

/// Parse a typed record out of a raw response body, keeping the endpoint
/// in the error so the failing gene/species is identifiable.
pub fn parse_value<T: DeserializeOwned>(endpoint: &str, value: &Value) -> Result<T, ApiError> {
    serde_json::from_value(value.clone()).map_err(|e| ApiError::Shape {
        url: endpoint.to_string(),
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeneRecord;

    #[test]
    fn parse_value_surfaces_endpoint_on_shape_error() {
        let value = serde_json::json!({"display_name": "ACTB"});
        let err = parse_value::<GeneRecord>("/lookup/symbol/homo_sapiens/ACTB", &value)
            .unwrap_err();
        match err {
            ApiError::Shape { url, .. } => {
                assert_eq!(url, "/lookup/symbol/homo_sapiens/ACTB")
            }
            other => panic!("expected Shape error, got {other:?}"),
        }
    }

    #[test]
    fn parse_value_accepts_wellformed_record() {
        let value = serde_json::json!({"id": "ENSG00000075624", "display_name": "ACTB"});
        let record: GeneRecord = parse_value("/lookup/symbol/homo_sapiens/ACTB", &value).unwrap();
        assert_eq!(record.id, "ENSG00000075624");
    }
}
