//! Core domain types
//!
//! Tickets, their responses and the rules that every stored value must
//! satisfy. Nothing in here touches storage.

mod builders;
mod response;
mod ticket;
pub mod validation;

pub use builders::{TicketBuilder, TicketResponseBuilder};
pub use response::{ResponseId, TicketResponse};
pub use ticket::{AccountId, Ticket, TicketKind, TicketNumber, TicketState};
pub use validation::MAX_TEXT_LENGTH;
