//! support-center - Support ticket management
//!
//! This is the main entry point for the support-center CLI application.
//! It handles command-line argument parsing, loads configuration and
//! dispatches to the appropriate command handler.

use clap::Parser;
use std::process;
use support_center::cli::handlers::{self, HandlerContext, TicketChanges};
use support_center::cli::{Cli, Commands, OutputFormatter};
use support_center::config::{Config, StorageBackend};
use support_center::error::{Result, SupportCenterError};
use tracing_subscriber::EnvFilter;

/// Main entry point for the support-center CLI
///
/// Parses command-line arguments and executes the requested command.
/// Exits with 3 on invalid input, 4 when a ticket does not exist and 1
/// on any other failure.
fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(e.exit_code());
    }
}

/// Load configuration, set up logging and run the command
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.data {
        config.storage.backend = StorageBackend::File;
        config.storage.path = path;
    }
    if cli.in_memory {
        config.storage.backend = StorageBackend::Memory;
    }

    init_logging(cli.verbose, &config.log.level);

    let ctx = HandlerContext::new(&config);
    dispatch_command(cli.command, &ctx, formatter)
}

/// Log to stderr; `--verbose` forces debug, otherwise `RUST_LOG` wins over the config
fn init_logging(verbose: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch_command(
    command: Commands,
    ctx: &HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::List => handlers::handle_list_command(ctx, formatter),
        Commands::Show { number } => handlers::handle_show_command(ctx, number, formatter),
        Commands::Add {
            account,
            device,
            text,
        } => handlers::handle_add_command(ctx, account, &text, device.as_deref(), formatter),
        Commands::Edit {
            number,
            text,
            account,
            state,
        } => handlers::handle_edit_command(
            ctx,
            number,
            TicketChanges {
                text,
                account_id: account,
                state,
            },
            formatter,
        ),
        Commands::Remove { number } => handlers::handle_remove_command(ctx, number, formatter),
        Commands::Responses { number } => {
            handlers::handle_responses_command(ctx, number, formatter)
        },
        Commands::Respond {
            number,
            client,
            text,
        } => handlers::handle_respond_command(ctx, number, &text, client, formatter),
        Commands::Close { number } => handlers::handle_close_command(ctx, number, formatter),
    }
}

/// Handle errors and display them to the user
///
/// Prints the message and any suggestions; in JSON mode the error is
/// also written to stdout as a JSON object.
fn handle_error(error: &SupportCenterError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !formatter.is_json() {
        eprintln!("\nSuggestions:");
        for suggestion in &suggestions {
            eprintln!("  • {suggestion}");
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "error_type": format!("{error:?}"),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
