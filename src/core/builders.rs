use super::{
    AccountId, ResponseId, Ticket, TicketKind, TicketNumber, TicketResponse, TicketState,
};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    number: Option<TicketNumber>,
    account_id: AccountId,
    text: Option<String>,
    date_opened: Option<DateTime<Utc>>,
    state: Option<TicketState>,
    kind: TicketKind,
    responses: Vec<TicketResponse>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket number
    ///
    /// Only storage and tests set this; new tickets get their number on
    /// creation.
    #[must_use]
    pub const fn number(mut self, number: TicketNumber) -> Self {
        self.number = Some(number);
        self
    }

    #[must_use]
    pub const fn account_id(mut self, account_id: AccountId) -> Self {
        self.account_id = account_id;
        self
    }

    /// Set the question text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set `date_opened` timestamp
    #[must_use]
    pub const fn date_opened(mut self, date_opened: DateTime<Utc>) -> Self {
        self.date_opened = Some(date_opened);
        self
    }

    /// Set the state
    #[must_use]
    pub const fn state(mut self, state: TicketState) -> Self {
        self.state = Some(state);
        self
    }

    /// Make this a hardware ticket for the given device
    #[must_use]
    pub fn device_name(mut self, device_name: impl Into<String>) -> Self {
        self.kind = TicketKind::Hardware {
            device_name: device_name.into(),
        };
        self
    }

    /// Add responses
    #[must_use]
    pub fn responses(mut self, responses: Vec<TicketResponse>) -> Self {
        self.responses = responses;
        self
    }

    /// Add a single response
    #[must_use]
    pub fn response(mut self, response: TicketResponse) -> Self {
        self.responses.push(response);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            number: self.number.unwrap_or_default(),
            account_id: self.account_id,
            text: self.text.unwrap_or_default(),
            date_opened: self.date_opened.unwrap_or_else(Utc::now),
            state: self.state.unwrap_or_default(),
            kind: self.kind,
            responses: self.responses,
        }
    }
}

/// Builder for creating TicketResponse instances
#[derive(Default)]
pub struct TicketResponseBuilder {
    id: ResponseId,
    ticket_number: TicketNumber,
    text: Option<String>,
    date: Option<DateTime<Utc>>,
    is_client_response: bool,
}

impl TicketResponseBuilder {
    /// Create a new response builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn id(mut self, id: ResponseId) -> Self {
        self.id = id;
        self
    }

    /// Set the owning ticket
    #[must_use]
    pub const fn ticket_number(mut self, ticket_number: TicketNumber) -> Self {
        self.ticket_number = ticket_number;
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set `date` timestamp
    #[must_use]
    pub const fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Mark the response as written by the client
    #[must_use]
    pub const fn client_response(mut self, is_client_response: bool) -> Self {
        self.is_client_response = is_client_response;
        self
    }

    /// Build the response
    pub fn build(self) -> TicketResponse {
        TicketResponse {
            id: self.id,
            ticket_number: self.ticket_number,
            text: self.text.unwrap_or_default(),
            date: self.date.unwrap_or_else(Utc::now),
            is_client_response: self.is_client_response,
        }
    }
}
