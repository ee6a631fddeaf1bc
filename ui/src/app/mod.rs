pub mod ticket_registration;

pub use ticket_registration::TicketRegistration;
