//! Infrastructure Services
//!
//! - **client**: REST client for the ticket collection endpoint
//! - **config**: Backend connection settings injected at construction
//! - **errors**: Configuration error types
//!
//! The services are WASM-first, using async traits without Send bounds.

pub mod client;
pub mod config;
pub mod errors;
