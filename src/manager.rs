//! Ticket lifecycle manager
//!
//! [`TicketManager`] is the only place where business rules live. It
//! validates input, decides state transitions and delegates every read
//! and write to the injected [`TicketRepository`]. Failures are never
//! retried or swallowed: absence is a hard error for every operation
//! except listing the responses of a ticket, which yields an empty list.
//!
//! # State transitions
//!
//! New tickets start `Open`. Adding a response moves the ticket to
//! `ClientAnswer` or `Answered` depending on who responded, whatever the
//! prior state, so a response to a `Closed` ticket reopens it. Closing is
//! an explicit operation and is allowed from any state.

use crate::core::validation::validate_text;
use crate::core::{
    AccountId, Ticket, TicketBuilder, TicketNumber, TicketResponse, TicketResponseBuilder,
    TicketState,
};
use crate::error::{Result, SupportCenterError};
use crate::storage::TicketRepository;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Validates and orchestrates ticket operations over a repository
#[derive(Debug)]
pub struct TicketManager<R> {
    repository: R,
}

impl<R: TicketRepository> TicketManager<R> {
    /// Create a manager over the given repository
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// All tickets with their responses, in storage order
    pub fn get_tickets(&self) -> Result<Vec<Ticket>> {
        debug!("Listing tickets");
        self.repository.read_tickets()
    }

    /// A single ticket
    ///
    /// Fails with `InvalidArgument` for a negative number and with
    /// `TicketNotFound` when no such ticket exists.
    pub fn get_ticket(&self, number: impl Into<TicketNumber>) -> Result<Ticket> {
        let number = number.into();
        debug!(%number, "Getting ticket");
        if number.is_negative() {
            warn!(%number, "Rejected negative ticket number");
            return Err(SupportCenterError::InvalidArgument(format!(
                "ticket number must not be negative, got {}",
                number.value()
            )));
        }
        self.repository.read_ticket(number)
    }

    /// Open a new ticket and return it with its storage-assigned number
    pub fn add_ticket<'a>(
        &self,
        account_id: AccountId,
        text: impl Into<Option<&'a str>>,
    ) -> Result<Ticket> {
        let text = validate_text("text", text.into()).inspect_err(log_rejection)?;
        let ticket = TicketBuilder::new()
            .account_id(account_id)
            .text(text)
            .date_opened(Utc::now())
            .state(TicketState::Open)
            .build();
        self.create(ticket)
    }

    /// Open a new ticket about a specific device
    pub fn add_hardware_ticket<'a>(
        &self,
        account_id: AccountId,
        text: impl Into<Option<&'a str>>,
        device_name: impl Into<Option<&'a str>>,
    ) -> Result<Ticket> {
        let text = validate_text("text", text.into()).inspect_err(log_rejection)?;
        let device_name =
            validate_text("device name", device_name.into()).inspect_err(log_rejection)?;
        let ticket = TicketBuilder::new()
            .account_id(account_id)
            .text(text)
            .device_name(device_name)
            .date_opened(Utc::now())
            .state(TicketState::Open)
            .build();
        self.create(ticket)
    }

    /// Replace a stored ticket
    ///
    /// The state is written exactly as given; no transition is applied.
    pub fn change_ticket<'a>(&self, ticket: impl Into<Option<&'a Ticket>>) -> Result<()> {
        let ticket = ticket.into().ok_or_else(|| SupportCenterError::NullArgument {
            name: "ticket".to_string(),
        })?;
        debug!(number = %ticket.number, "Changing ticket");
        validate_text("text", Some(ticket.text.as_str())).inspect_err(log_rejection)?;
        if let Some(device_name) = ticket.device_name() {
            validate_text("device name", Some(device_name)).inspect_err(log_rejection)?;
        }
        self.repository.update_ticket(ticket)?;
        info!(number = %ticket.number, state = %ticket.state, "Ticket changed");
        Ok(())
    }

    /// Delete a ticket and its responses
    pub fn remove_ticket(&self, number: impl Into<TicketNumber>) -> Result<()> {
        let number = number.into();
        self.repository.delete_ticket(number)?;
        info!(%number, "Ticket removed");
        Ok(())
    }

    /// Responses of a ticket, oldest first
    ///
    /// Unknown tickets have no responses; this is not an error.
    pub fn get_ticket_responses(
        &self,
        number: impl Into<TicketNumber>,
    ) -> Result<Vec<TicketResponse>> {
        let number = number.into();
        debug!(%number, "Listing responses");
        self.repository.read_ticket_responses_of_ticket(number)
    }

    /// Add a response and move the ticket to the matching state
    ///
    /// The response is persisted before the ticket. If the ticket update
    /// fails the response stays recorded, the ticket keeps its previous
    /// state and the update error is returned.
    pub fn add_ticket_response<'a>(
        &self,
        number: impl Into<TicketNumber>,
        text: impl Into<Option<&'a str>>,
        is_client_response: bool,
    ) -> Result<TicketResponse> {
        let number = number.into();
        let text = validate_text("response text", text.into()).inspect_err(log_rejection)?;
        let mut ticket = self.repository.read_ticket(number)?;

        let response = self.repository.create_ticket_response(
            TicketResponseBuilder::new()
                .ticket_number(ticket.number)
                .text(text)
                .date(Utc::now())
                .client_response(is_client_response)
                .build(),
        )?;
        debug!(%number, response_id = response.id, "Response stored");

        let previous = ticket.state;
        ticket.state = TicketState::after_response(is_client_response);
        ticket.responses.push(response.clone());
        self.repository.update_ticket(&ticket).inspect_err(|e| {
            warn!(%number, response_id = response.id, error = %e, "Response stored but ticket state not updated");
        })?;
        info!(%number, from = %previous, to = %ticket.state, "Ticket answered");

        Ok(response)
    }

    /// Close a ticket, whatever its current state
    pub fn close_ticket(&self, number: impl Into<TicketNumber>) -> Result<()> {
        let number = number.into();
        self.repository.update_ticket_state_to_closed(number)?;
        info!(%number, "Ticket closed");
        Ok(())
    }

    fn create(&self, ticket: Ticket) -> Result<Ticket> {
        let created = self.repository.create_ticket(ticket)?;
        info!(
            number = %created.number,
            account_id = created.account_id,
            hardware = created.device_name().is_some(),
            "Ticket opened"
        );
        Ok(created)
    }
}

fn log_rejection(error: &SupportCenterError) {
    warn!(error = %error, "Rejected invalid input");
}
