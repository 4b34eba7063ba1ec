use super::TicketResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of the account that submitted a ticket
pub type AccountId = i32;

/// Storage-assigned ticket number
///
/// Numbers are signed so that a caller-supplied negative value can be
/// represented and rejected by the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(i64);

impl TicketNumber {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for TicketNumber {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketState {
    #[default]
    Open,
    Answered,
    ClientAnswer,
    Closed,
}

impl TicketState {
    /// State a ticket moves to after a response is added
    ///
    /// The prior state is deliberately not consulted: a closed ticket is
    /// reopened by any new response.
    #[must_use]
    pub const fn after_response(is_client_response: bool) -> Self {
        if is_client_response {
            Self::ClientAnswer
        } else {
            Self::Answered
        }
    }
}

impl fmt::Display for TicketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Answered => "answered",
            Self::ClientAnswer => "client-answer",
            Self::Closed => "closed",
        };
        f.write_str(name)
    }
}

impl FromStr for TicketState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "answered" => Ok(Self::Answered),
            "client-answer" | "client_answer" | "clientanswer" => Ok(Self::ClientAnswer),
            "closed" => Ok(Self::Closed),
            _ => Err(format!(
                "Invalid state: {s}. Must be one of: open, answered, client-answer, closed"
            )),
        }
    }
}

/// Kind of ticket
///
/// A hardware ticket is an ordinary ticket that also names the device
/// the question is about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TicketKind {
    #[default]
    Standard,
    Hardware { device_name: String },
}

/// A support request with its accumulated responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub number: TicketNumber,
    pub account_id: AccountId,
    pub text: String,
    pub date_opened: DateTime<Utc>,
    pub state: TicketState,
    #[serde(default)]
    pub kind: TicketKind,
    /// Responses in the order they were added
    #[serde(default)]
    pub responses: Vec<TicketResponse>,
}

impl Ticket {
    /// Device name, for hardware tickets
    pub fn device_name(&self) -> Option<&str> {
        match &self.kind {
            TicketKind::Hardware { device_name } => Some(device_name),
            TicketKind::Standard => None,
        }
    }

    pub const fn is_closed(&self) -> bool {
        matches!(self.state, TicketState::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    #[test]
    fn test_state_after_response() {
        assert_eq!(TicketState::after_response(true), TicketState::ClientAnswer);
        assert_eq!(TicketState::after_response(false), TicketState::Answered);
    }

    #[test]
    fn test_state_parsing() {
        assert_eq!("open".parse::<TicketState>(), Ok(TicketState::Open));
        assert_eq!("ANSWERED".parse::<TicketState>(), Ok(TicketState::Answered));
        assert_eq!(
            "client_answer".parse::<TicketState>(),
            Ok(TicketState::ClientAnswer)
        );
        assert_eq!("Closed".parse::<TicketState>(), Ok(TicketState::Closed));
        assert!("pending".parse::<TicketState>().is_err());

        for state in [
            TicketState::Open,
            TicketState::Answered,
            TicketState::ClientAnswer,
            TicketState::Closed,
        ] {
            assert_eq!(state.to_string().parse::<TicketState>(), Ok(state));
        }
    }

    #[test]
    fn test_ticket_number() {
        let number = TicketNumber::from(-3);
        assert!(number.is_negative());
        assert_eq!(number.value(), -3);
        assert_eq!(TicketNumber::new(12).to_string(), "#12");
    }

    #[test]
    fn test_device_name() {
        let ticket = TicketBuilder::new()
            .text("Printer jams")
            .device_name("HP LaserJet")
            .build();
        assert_eq!(ticket.device_name(), Some("HP LaserJet"));

        let ticket = TicketBuilder::new().text("Password reset").build();
        assert_eq!(ticket.device_name(), None);
    }

    #[test]
    fn test_ticket_serialization_shape() {
        let ticket = TicketBuilder::new()
            .number(TicketNumber::new(4))
            .text("Screen flickers")
            .device_name("Dell U2412")
            .state(TicketState::ClientAnswer)
            .build();

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["number"], 4);
        assert_eq!(json["state"], "client_answer");
        assert_eq!(json["kind"]["type"], "hardware");
        assert_eq!(json["kind"]["device_name"], "Dell U2412");
    }
}
