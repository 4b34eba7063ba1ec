use super::{StoreState, TicketRepository};
use crate::core::{Ticket, TicketNumber, TicketResponse};
use crate::error::{Result, SupportCenterError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local ticket store
///
/// Operations are serialized by a read/write lock, so each one is atomic
/// with respect to the others.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: RwLock<StoreState>,
}

impl InMemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing tickets, keeping their numbers
    #[must_use]
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            state: RwLock::new(StoreState::from_tickets(tickets)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| SupportCenterError::custom("Ticket store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| SupportCenterError::custom("Ticket store lock poisoned"))
    }
}

impl TicketRepository for InMemoryStorage {
    fn create_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        let created = self.write()?.create_ticket(ticket);
        tracing::debug!(number = %created.number, "Stored ticket in memory");
        Ok(created)
    }

    fn read_ticket(&self, number: TicketNumber) -> Result<Ticket> {
        self.read()?.read_ticket(number)
    }

    fn read_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.read()?.read_tickets())
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.write()?.update_ticket(ticket)
    }

    fn delete_ticket(&self, number: TicketNumber) -> Result<()> {
        self.write()?.delete_ticket(number)
    }

    fn create_ticket_response(&self, response: TicketResponse) -> Result<TicketResponse> {
        self.write()?.create_ticket_response(response)
    }

    fn read_ticket_responses_of_ticket(
        &self,
        number: TicketNumber,
    ) -> Result<Vec<TicketResponse>> {
        Ok(self.read()?.read_ticket_responses_of_ticket(number))
    }

    fn update_ticket_state_to_closed(&self, number: TicketNumber) -> Result<()> {
        self.write()?.update_ticket_state_to_closed(number)
    }
}
