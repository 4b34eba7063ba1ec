//! Ticket persistence
//!
//! [`TicketRepository`] is the storage contract the ticket manager depends
//! on. Two implementations are provided: [`InMemoryStorage`] for ephemeral
//! sessions and tests, and [`JsonFileStorage`] for a store that persists
//! between runs. Both apply their operations to a shared [`StoreState`].

mod file;
mod memory;
mod repository;
mod state;

pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;
#[cfg(test)]
pub use repository::MockTicketRepository;
pub use repository::TicketRepository;
pub use state::StoreState;
