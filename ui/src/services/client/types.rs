use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::{ClientError, ClientResult};
use crate::registration::TicketPayload;

/// Status and body text of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success status into `ClientError::HttpStatus`, keeping the body
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::HttpStatus {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Ticket as returned by the backend: the submitted fields plus its id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: u64,
    #[serde(flatten)]
    pub details: TicketPayload,
}

/// Service index served at the backend root
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiIndex {
    pub message: String,
    pub endpoints: ApiEndpoints,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiEndpoints {
    pub tickets: String,
    pub admin: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, String::new()).is_success());
        assert!(ApiResponse::new(201, String::new()).is_success());
        assert!(ApiResponse::new(204, String::new()).is_success());
        assert!(!ApiResponse::new(301, String::new()).is_success());
        assert!(!ApiResponse::new(400, String::new()).is_success());
        assert!(!ApiResponse::new(500, String::new()).is_success());
    }

    #[test]
    fn test_error_for_status_keeps_body() {
        let err = ApiResponse::new(400, "Invalid email".to_string())
            .error_for_status()
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::HttpStatus {
                status: 400,
                body: "Invalid email".to_string()
            }
        );
    }

    #[test]
    fn test_decode_ticket_list() {
        let body = r#"[{
            "id": 7,
            "full_name": "Ama Mensah",
            "email": "ama@example.com",
            "phone": "+233 555 123 456",
            "id_number": "",
            "gender": "female",
            "ticket_type": "vvip",
            "quantity": 2,
            "event_date": "2025-05-01",
            "event_location": "Accra"
        }]"#;

        let tickets: Vec<Ticket> = ApiResponse::new(200, body.to_string()).json().unwrap();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 7);
        assert_eq!(tickets[0].details.ticket_type, "vvip");
        assert_eq!(tickets[0].details.quantity.as_u64(), Some(2));
    }

    #[test]
    fn test_decode_api_index() {
        let body = r#"{
            "message": "Ticket Registration API",
            "endpoints": {"tickets": "/api/tickets/", "admin": "/admin/"}
        }"#;

        let index: ApiIndex = ApiResponse::new(200, body.to_string()).json().unwrap();

        assert_eq!(index.message, "Ticket Registration API");
        assert_eq!(index.endpoints.tickets, "/api/tickets/");
        assert_eq!(index.endpoints.admin, "/admin/");
    }

    #[test]
    fn test_decode_malformed_body() {
        let result: ClientResult<ApiIndex> = ApiResponse::new(200, "<html>".to_string()).json();
        assert!(matches!(
            result,
            Err(ClientError::SerializationError { .. })
        ));
    }
}
