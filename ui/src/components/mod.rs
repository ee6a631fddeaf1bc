//! User Interface Components
//!
//! - **forms**: The ticket registration form
//! - **display**: Submission status line and the booking confirmation modal
//! - **inputs**: Controlled text/select fields bound to one form value

pub mod display;
pub mod forms;
pub mod inputs;
