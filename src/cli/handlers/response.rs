//! Handlers for response commands

use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;

/// Handler for the `responses` command
///
/// An unknown ticket simply has no responses.
pub fn handle_responses_command(
    ctx: &HandlerContext,
    number: i64,
    output: &OutputFormatter,
) -> Result<()> {
    let responses = ctx.manager().get_ticket_responses(number)?;

    if output.is_json() {
        return output.json(&responses);
    }
    if responses.is_empty() {
        output.info("No responses");
        return Ok(());
    }
    for response in &responses {
        output.info(&OutputFormatter::response_line(response));
    }
    Ok(())
}

/// Handler for the `respond` command
pub fn handle_respond_command(
    ctx: &HandlerContext,
    number: i64,
    text: &str,
    client: bool,
    output: &OutputFormatter,
) -> Result<()> {
    let response = ctx.manager().add_ticket_response(number, text, client)?;

    if output.is_json() {
        return output.json(&response);
    }
    output.success(&format!(
        "Added {} response to ticket {}",
        response.author_label(),
        response.ticket_number
    ));
    Ok(())
}
