use crate::core::{ResponseId, Ticket, TicketNumber, TicketResponse};
use crate::error::{Result, SupportCenterError};
use serde::{Deserialize, Serialize};

/// Complete contents of a ticket store
///
/// Both storage backends apply their operations to this structure, which
/// keeps tickets in creation order and tracks the last identifiers handed
/// out so numbers are never reused.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    last_ticket_number: i64,
    #[serde(default)]
    last_response_id: ResponseId,
    #[serde(default)]
    tickets: Vec<Ticket>,
}

impl StoreState {
    /// Build a store around existing tickets, keeping their numbers
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        let last_ticket_number = tickets
            .iter()
            .map(|t| t.number.value())
            .max()
            .unwrap_or(0);
        let last_response_id = tickets
            .iter()
            .flat_map(|t| t.responses.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Self {
            last_ticket_number,
            last_response_id,
            tickets,
        }
    }

    pub fn create_ticket(&mut self, mut ticket: Ticket) -> Ticket {
        self.last_ticket_number += 1;
        ticket.number = TicketNumber::new(self.last_ticket_number);
        for response in &mut ticket.responses {
            self.last_response_id += 1;
            response.id = self.last_response_id;
            response.ticket_number = ticket.number;
        }
        self.tickets.push(ticket.clone());
        ticket
    }

    pub fn read_ticket(&self, number: TicketNumber) -> Result<Ticket> {
        self.tickets
            .iter()
            .find(|t| t.number == number)
            .cloned()
            .ok_or(SupportCenterError::TicketNotFound { number })
    }

    pub fn read_tickets(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    pub fn update_ticket(&mut self, ticket: &Ticket) -> Result<()> {
        let stored = self.ticket_mut(ticket.number)?;
        stored.account_id = ticket.account_id;
        stored.text.clone_from(&ticket.text);
        stored.state = ticket.state;
        stored.kind = ticket.kind.clone();
        Ok(())
    }

    pub fn delete_ticket(&mut self, number: TicketNumber) -> Result<()> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.number == number)
            .ok_or(SupportCenterError::TicketNotFound { number })?;
        self.tickets.remove(index);
        Ok(())
    }

    pub fn create_ticket_response(&mut self, mut response: TicketResponse) -> Result<TicketResponse> {
        let id = self.last_response_id + 1;
        let ticket = self.ticket_mut(response.ticket_number)?;
        response.id = id;
        ticket.responses.push(response.clone());
        self.last_response_id = id;
        Ok(response)
    }

    pub fn read_ticket_responses_of_ticket(&self, number: TicketNumber) -> Vec<TicketResponse> {
        self.tickets
            .iter()
            .find(|t| t.number == number)
            .map(|t| t.responses.clone())
            .unwrap_or_default()
    }

    pub fn update_ticket_state_to_closed(&mut self, number: TicketNumber) -> Result<()> {
        self.ticket_mut(number)?.state = crate::core::TicketState::Closed;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    fn ticket_mut(&mut self, number: TicketNumber) -> Result<&mut Ticket> {
        self.tickets
            .iter_mut()
            .find(|t| t.number == number)
            .ok_or(SupportCenterError::TicketNotFound { number })
    }
}
