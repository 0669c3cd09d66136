pub mod ticket_api;

pub use ticket_api::TicketApi;
