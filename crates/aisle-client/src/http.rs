use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use serde::de::DeserializeOwned;

use aisle_core::catalog::Product;
use aisle_core::config::normalize_base_url;
use aisle_core::config::ApiConfig;
use aisle_core::recommendation::RecommendationRequest;
use aisle_core::recommendation::RecommendationResponse;

use crate::api::CatalogApi;
use crate::contracts::ApiError;
use crate::contracts::Endpoint;

/// Blocking HTTP implementation of [`CatalogApi`]; meant to be driven from a
/// worker thread.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// `timeout` of `None` means requests wait for the service indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.base_url,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status });
        }
        let body = response
            .bytes()
            .map_err(|source| ApiError::Transport { endpoint, source })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

impl CatalogApi for HttpCatalogApi {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let endpoint = Endpoint::Products;
        log::debug!("{endpoint} -> {}", self.url(endpoint));
        self.send_json(endpoint, self.client.get(self.url(endpoint)))
    }

    fn fetch_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ApiError> {
        let endpoint = Endpoint::Recommendations;
        log::debug!(
            "{endpoint} -> {} ({} history ids)",
            self.url(endpoint),
            request.browsing_history.len()
        );
        self.send_json(endpoint, self.client.post(self.url(endpoint)).json(request))
    }
}
