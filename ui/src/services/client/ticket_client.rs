use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::traits::TicketApi;
use super::types::{ApiIndex, ApiResponse};
use crate::registration::TicketPayload;
use crate::services::config::ApiConfig;

/// Client for the ticket REST backend
#[derive(Clone)]
pub struct TicketClient {
    pub(crate) http_client: Client,
    pub(crate) config: ApiConfig,
}

impl TicketClient {
    /// Create a client bound to the given backend configuration
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::InitializationFailed {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the service index from the backend root
    #[instrument(skip(self), err)]
    pub async fn describe_api(&self) -> ClientResult<ApiIndex> {
        let request = self.http_client.get(self.config.service_root_url());
        self.send(request, "describe_api").await?.json()
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(&self, request: RequestBuilder) -> RequestBuilder {
        if self.config.include_credentials {
            request.fetch_credentials_include()
        } else {
            request
        }
    }

    // Native builds have no browser cookie jar to forward
    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }

    #[instrument(skip(self, request))]
    async fn send(&self, request: RequestBuilder, operation: &str) -> ClientResult<ApiResponse> {
        let response = self
            .with_credentials(request)
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {}", e);
                ClientError::NetworkError {
                    message: format!("Failed to {}: {}", operation, e),
                }
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| ClientError::NetworkError {
            message: format!("Failed to read {} response: {}", operation, e),
        })?;

        info!(status, "Received response");
        ApiResponse::new(status, body).error_for_status()
    }
}

#[async_trait(?Send)]
impl TicketApi for TicketClient {
    async fn get_all(&self) -> ClientResult<ApiResponse> {
        let request = self.http_client.get(self.config.collection_url());
        self.send(request, "list_tickets").await
    }

    async fn get_by_id(&self, id: u64) -> ClientResult<ApiResponse> {
        let request = self.http_client.get(self.config.resource_url(id));
        self.send(request, "get_ticket").await
    }

    async fn create(&self, payload: &TicketPayload) -> ClientResult<ApiResponse> {
        let request = self
            .http_client
            .post(self.config.collection_url())
            .json(payload);
        self.send(request, "create_ticket").await
    }

    async fn update(&self, id: u64, payload: &TicketPayload) -> ClientResult<ApiResponse> {
        let request = self
            .http_client
            .put(self.config.resource_url(id))
            .json(payload);
        self.send(request, "update_ticket").await
    }

    async fn delete(&self, id: u64) -> ClientResult<ApiResponse> {
        let request = self.http_client.delete(self.config.resource_url(id));
        self.send(request, "delete_ticket").await
    }
}
