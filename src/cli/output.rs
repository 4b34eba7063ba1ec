use crate::core::{Ticket, TicketResponse, TicketState};
use crate::error::Result;
use chrono::Local;
use colored::{ColoredString, Colorize};
use serde::Serialize;

/// Renders command results as colored text or JSON
#[derive(Debug, Clone, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter; `no_color` disables ANSI colors process-wide
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        if !self.json {
            println!("{} {message}", "✓".green().bold());
        }
    }

    pub fn info(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "error:".red().bold());
    }

    /// Print any serializable value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// One-line summary of a ticket
    pub fn ticket_line(ticket: &Ticket) -> String {
        let device = ticket
            .device_name()
            .map(|name| format!(" [{name}]"))
            .unwrap_or_default();
        format!(
            "{:>5}  {:<13}  account {:<6}  {}  {}{}  ({} responses)",
            ticket.number.to_string().bold(),
            state_label(ticket.state),
            ticket.account_id,
            ticket.date_opened.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            ticket.text,
            device.cyan(),
            ticket.responses.len(),
        )
    }

    /// One-line summary of a response
    pub fn response_line(response: &TicketResponse) -> String {
        let author = if response.is_client_response {
            response.author_label().magenta()
        } else {
            response.author_label().blue()
        };
        format!(
            "  {}  {:<7}  {}",
            response.date.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            author,
            response.text
        )
    }
}

fn state_label(state: TicketState) -> ColoredString {
    let label = state.to_string();
    match state {
        TicketState::Open => label.yellow(),
        TicketState::Answered => label.green(),
        TicketState::ClientAnswer => label.magenta(),
        TicketState::Closed => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TicketBuilder, TicketNumber, TicketResponseBuilder};

    #[test]
    fn test_ticket_line() {
        colored::control::set_override(false);
        let ticket = TicketBuilder::new()
            .number(TicketNumber::new(3))
            .account_id(42)
            .text("Monitor is blank")
            .device_name("Dell U2412")
            .response(TicketResponseBuilder::new().text("Check the cable").build())
            .build();

        let line = OutputFormatter::ticket_line(&ticket);
        assert!(line.contains("#3"));
        assert!(line.contains("open"));
        assert!(line.contains("account 42"));
        assert!(line.contains("Monitor is blank [Dell U2412]"));
        assert!(line.contains("(1 responses)"));
    }

    #[test]
    fn test_response_line() {
        colored::control::set_override(false);
        let response = TicketResponseBuilder::new()
            .text("Still broken")
            .client_response(true)
            .build();

        let line = OutputFormatter::response_line(&response);
        assert!(line.contains("client"));
        assert!(line.ends_with("Still broken"));
    }

    #[test]
    fn test_json_mode() {
        let formatter = OutputFormatter::new(true, true);
        assert!(formatter.is_json());
        assert!(formatter.json(&serde_json::json!({ "status": "ok" })).is_ok());
    }
}
