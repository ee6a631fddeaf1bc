pub mod status_message;
pub mod success_modal;

pub use status_message::StatusMessage;
pub use success_modal::SuccessModal;
