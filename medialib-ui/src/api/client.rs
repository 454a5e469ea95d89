//! HTTP API Client
//!
//! Functions for communicating with the medialib REST API.

use gloo_net::http::Request;

use crate::state::global::{MaterialCounts, ResourceDetail, ResourceRow, TrendPoint};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8088/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("medialib_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Error envelope returned by the API on non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
    #[serde(default)]
    pub request_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiErrorResponse {
    fn unknown() -> Self {
        ApiErrorResponse {
            error: ApiErrorBody {
                code: "UNKNOWN".to_string(),
                message: "Unknown error".to_string(),
            },
            request_id: None,
        }
    }
}

// ============ API Functions ============

/// Fetch library-wide material counts
pub async fn fetch_counts() -> Result<MaterialCounts, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/counts", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiErrorResponse = response.json().await
            .unwrap_or_else(|_| ApiErrorResponse::unknown());
        return Err(error.error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the 7-day trend series
pub async fn fetch_trend() -> Result<Vec<TrendPoint>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/trend", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiErrorResponse = response.json().await
            .unwrap_or_else(|_| ApiErrorResponse::unknown());
        return Err(error.error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the project resource table rows
pub async fn fetch_resource_list() -> Result<Vec<ResourceRow>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/resources", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiErrorResponse = response.json().await
            .unwrap_or_else(|_| ApiErrorResponse::unknown());
        return Err(error.error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the full detail record for one resource
pub async fn fetch_resource_detail(id: &str) -> Result<ResourceDetail, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/resources/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiErrorResponse = response.json().await
            .unwrap_or_else(|_| ApiErrorResponse::unknown());
        return Err(error.error.message);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
