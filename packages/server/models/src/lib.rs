#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the bloom data server.
//!
//! Query parameters are kept as raw strings so the server can tell a
//! missing parameter apart from one that fails to parse, and report each
//! with its own message.

use serde::{Deserialize, Serialize};

/// Query parameters for the bloom data endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloomDataQueryParams {
    /// Center latitude in degrees.
    pub lat: Option<String>,
    /// Center longitude in degrees.
    pub lon: Option<String>,
    /// Half-width of the bounding box in degrees.
    pub radius: Option<String>,
    /// First date of the range (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Last date of the range (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description of what was wrong.
    pub error: String,
}

impl ApiError {
    /// Creates an error body with the given message.
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}
