//! Command-line interface
//!
//! A thin presentation layer over the ticket manager: argument parsing,
//! handler dispatch and output rendering.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use crate::core::{AccountId, TicketState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Support ticket management
#[derive(Parser, Debug)]
#[command(name = "support-center", version, about = "Manage support tickets and their responses")]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ticket data file, overriding the configured storage
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Use a throwaway in-memory store
    #[arg(long, global = true, conflicts_with = "data")]
    pub in_memory: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tickets
    List,

    /// Show a ticket and its responses
    Show {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Open a new ticket
    Add {
        /// Account submitting the ticket
        #[arg(short, long)]
        account: AccountId,

        /// Device the question is about (opens a hardware ticket)
        #[arg(short, long)]
        device: Option<String>,

        /// Question text (at most 100 characters)
        text: String,
    },

    /// Change a ticket
    Edit {
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// New question text
        #[arg(long)]
        text: Option<String>,

        /// New account
        #[arg(long)]
        account: Option<AccountId>,

        /// New state (open, answered, client-answer, closed)
        #[arg(long)]
        state: Option<TicketState>,
    },

    /// Remove a ticket and its responses
    Remove {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// List the responses of a ticket
    Responses {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Respond to a ticket
    Respond {
        #[arg(allow_negative_numbers = true)]
        number: i64,

        /// The response comes from the client rather than support
        #[arg(short, long)]
        client: bool,

        /// Response text (at most 100 characters)
        text: String,
    },

    /// Close a ticket
    Close {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
}
