use super::TicketNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned response identifier, 0 until persisted
pub type ResponseId = u64;

/// A single reply attached to a ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketResponse {
    pub id: ResponseId,
    /// Owning ticket, used for lookup only
    pub ticket_number: TicketNumber,
    pub text: String,
    pub date: DateTime<Utc>,
    pub is_client_response: bool,
}

impl TicketResponse {
    /// Who wrote the response, for display
    pub const fn author_label(&self) -> &'static str {
        if self.is_client_response {
            "client"
        } else {
            "support"
        }
    }
}
