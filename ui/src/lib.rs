//! This crate contains the UI components and services for event ticket registration.

pub mod app;
pub use app::TicketRegistration;

pub mod components;
pub mod registration;
pub mod services;
pub mod utils;
