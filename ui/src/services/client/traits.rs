use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::ApiResponse;
use crate::registration::TicketPayload;

/// Operations on the ticket collection endpoint.
///
/// Non-success statuses are returned as `ClientError::HttpStatus` so callers
/// only need to match on the error side.
#[async_trait(?Send)] // Allow non-Send futures for WASM compatibility
pub trait TicketApi {
    /// `GET /tickets/`
    async fn get_all(&self) -> ClientResult<ApiResponse>;

    /// `GET /tickets/{id}/`
    async fn get_by_id(&self, id: u64) -> ClientResult<ApiResponse>;

    /// `POST /tickets/`
    async fn create(&self, payload: &TicketPayload) -> ClientResult<ApiResponse>;

    /// `PUT /tickets/{id}/`
    async fn update(&self, id: u64, payload: &TicketPayload) -> ClientResult<ApiResponse>;

    /// `DELETE /tickets/{id}/`
    async fn delete(&self, id: u64) -> ClientResult<ApiResponse>;
}
