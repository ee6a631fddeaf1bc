// Client-side access to the ticket backend
//
// - `TicketApi`: the collection operations the form depends on
// - `TicketClient`: reqwest implementation (browser fetch on wasm32)
// - Response and error types shared by both

pub mod errors;
pub mod ticket_client;
pub mod traits;
pub mod types;

pub use errors::{ClientError, ClientResult};
pub use ticket_client::TicketClient;
pub use traits::TicketApi;
pub use types::{ApiEndpoints, ApiIndex, ApiResponse, Ticket};
