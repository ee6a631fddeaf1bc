//! Ticket Registration Workflow
//!
//! Form state, the reducer that drives it, the payload projection sent to the
//! backend and the submission boundary that turns transport errors into the
//! status text shown under the form.
//!
//! # Usage
//!
//! ```ignore
//! let payload = begin_submission(&mut state);
//! let outcome = submit_ticket(&client, payload).await;
//! state.reduce_in_place(RegistrationAction::SubmitFinished(outcome));
//! ```

pub mod payload;
pub mod submission;
pub mod types;

pub use payload::*;
pub use submission::*;
pub use types::*;
