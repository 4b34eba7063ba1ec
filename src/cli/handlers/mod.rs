//! Command handlers
//!
//! Handlers translate parsed commands into ticket manager calls and
//! render the results. They hold no business rules of their own.

mod common;
mod response;
mod ticket;

pub use common::HandlerContext;
pub use response::{handle_respond_command, handle_responses_command};
pub use ticket::{
    TicketChanges, handle_add_command, handle_close_command, handle_edit_command,
    handle_list_command, handle_remove_command, handle_show_command,
};
