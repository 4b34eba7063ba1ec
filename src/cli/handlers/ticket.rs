//! Handlers for ticket commands
//!
//! Each handler performs exactly one manager call (edit performs a read
//! followed by the change) and renders the result.

use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::{AccountId, TicketState};
use crate::error::Result;
use serde_json::json;

/// Handler for the `list` command
pub fn handle_list_command(ctx: &HandlerContext, output: &OutputFormatter) -> Result<()> {
    let tickets = ctx.manager().get_tickets()?;

    if output.is_json() {
        return output.json(&tickets);
    }
    if tickets.is_empty() {
        output.info("No tickets");
        return Ok(());
    }
    for ticket in &tickets {
        output.info(&OutputFormatter::ticket_line(ticket));
    }
    Ok(())
}

/// Handler for the `show` command
///
/// Prints the ticket followed by its responses.
pub fn handle_show_command(
    ctx: &HandlerContext,
    number: i64,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket = ctx.manager().get_ticket(number)?;
    let responses = ctx.manager().get_ticket_responses(ticket.number)?;

    if output.is_json() {
        return output.json(&json!({
            "ticket": ticket,
            "responses": responses,
        }));
    }

    output.info(&OutputFormatter::ticket_line(&ticket));
    for response in &responses {
        output.info(&OutputFormatter::response_line(response));
    }
    Ok(())
}

/// Handler for the `add` command
///
/// Opens a hardware ticket when a device name is given.
pub fn handle_add_command(
    ctx: &HandlerContext,
    account_id: AccountId,
    text: &str,
    device: Option<&str>,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket = match device {
        Some(device) => ctx
            .manager()
            .add_hardware_ticket(account_id, text, device)?,
        None => ctx.manager().add_ticket(account_id, text)?,
    };

    if output.is_json() {
        return output.json(&ticket);
    }
    output.success(&format!("Opened ticket {}", ticket.number));
    Ok(())
}

/// Fields the `edit` command may change
#[derive(Debug, Default)]
pub struct TicketChanges {
    pub text: Option<String>,
    pub account_id: Option<AccountId>,
    pub state: Option<TicketState>,
}

/// Handler for the `edit` command
pub fn handle_edit_command(
    ctx: &HandlerContext,
    number: i64,
    changes: TicketChanges,
    output: &OutputFormatter,
) -> Result<()> {
    let mut ticket = ctx.manager().get_ticket(number)?;
    if let Some(text) = changes.text {
        ticket.text = text;
    }
    if let Some(account_id) = changes.account_id {
        ticket.account_id = account_id;
    }
    if let Some(state) = changes.state {
        ticket.state = state;
    }

    ctx.manager().change_ticket(&ticket)?;

    if output.is_json() {
        return output.json(&ticket);
    }
    output.success(&format!("Updated ticket {}", ticket.number));
    Ok(())
}

/// Handler for the `remove` command
pub fn handle_remove_command(
    ctx: &HandlerContext,
    number: i64,
    output: &OutputFormatter,
) -> Result<()> {
    ctx.manager().remove_ticket(number)?;

    if output.is_json() {
        return output.json(&json!({ "status": "removed", "number": number }));
    }
    output.success(&format!("Removed ticket #{number}"));
    Ok(())
}

/// Handler for the `close` command
pub fn handle_close_command(
    ctx: &HandlerContext,
    number: i64,
    output: &OutputFormatter,
) -> Result<()> {
    if ctx.manager().get_ticket(number)?.is_closed() {
        output.warning(&format!("Ticket #{number} is already closed"));
    }
    ctx.manager().close_ticket(number)?;

    if output.is_json() {
        return output.json(&json!({ "status": "closed", "number": number }));
    }
    output.success(&format!("Closed ticket #{number}"));
    Ok(())
}
