//! Path-computation service HTTP client.

use meddispatch_core::{Dispatch, RoutePlan};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced to the operator. "Service reachable but rejected the
/// request" must read differently from "service unreachable", so the two are
/// separate variants.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route service returned {status}: {body}")]
    Service { status: StatusCode, body: String },
    #[error("cannot reach route service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed route service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the delivery path-computation service.
pub struct RouteClient {
    client: Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Submit the full dispatch set and return the computed plan.
    ///
    /// Dispatches are sent in collection order. No retry is attempted here;
    /// retry policy belongs to the caller. An empty `drone_paths` in the
    /// response is a valid "no plan" result, not an error.
    pub async fn calculate_delivery_path(
        &self,
        dispatches: &[Dispatch],
    ) -> Result<RoutePlan, RouteError> {
        let url = format!("{}/api/v1/calcDeliveryPath", self.base_url);
        tracing::debug!(count = dispatches.len(), %url, "submitting dispatch set");

        let response = self.client.post(&url).json(dispatches).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RouteError::Service { status, body });
        }

        response.json::<RoutePlan>().await.map_err(RouteError::Decode)
    }
}
