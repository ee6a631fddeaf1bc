//! Ticket submission boundary
//!
//! Converts the client's transport errors into the two outcomes the form
//! distinguishes and snapshots the payload before any await point.

use thiserror::Error;
use tracing::{error, info, instrument};

use super::payload::TicketPayload;
use super::types::{RegistrationAction, RegistrationState};
use crate::services::client::{ApiResponse, ClientError, TicketApi};

pub const GENERIC_FAILURE_MESSAGE: &str = "Sorry, we could not save your ticket. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Ticket rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl SubmissionError {
    /// Text surfaced in the form's status line
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected { body, .. } if !body.trim().is_empty() => body.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<ClientError> for SubmissionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::HttpStatus { status, body } => SubmissionError::Rejected { status, body },
            other => SubmissionError::Network {
                message: other.to_string(),
            },
        }
    }
}

pub type SubmissionOutcome = Result<ApiResponse, SubmissionError>;

/// Move the form into the submitting state and snapshot the payload to send
pub fn begin_submission(state: &mut RegistrationState) -> TicketPayload {
    let payload = TicketPayload::from(&state.form);
    state.reduce_in_place(RegistrationAction::SubmitStarted);
    payload
}

/// POST one ticket. Failures are returned, never retried.
#[instrument(skip_all, fields(ticket_type = %payload.ticket_type, quantity = %payload.quantity))]
pub async fn submit_ticket<A: TicketApi + ?Sized>(api: &A, payload: TicketPayload) -> SubmissionOutcome {
    match api.create(&payload).await {
        Ok(response) => {
            info!(status = response.status, "Ticket submitted");
            Ok(response)
        }
        Err(e) => {
            error!("Ticket submission failed: {}", e);
            Err(e.into())
        }
    }
}
