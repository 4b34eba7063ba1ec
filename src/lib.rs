//! support-center - Support ticket lifecycle management
//!
//! This crate manages support tickets and the responses threaded onto them:
//! - Validation of ticket and response text before anything is stored
//! - State progression driven by who responded (client or support)
//! - Standard and hardware tickets sharing one lifecycle
//! - Pluggable storage behind the [`storage::TicketRepository`] contract
//!
//! # Example
//!
//! ```rust
//! use support_center::core::TicketState;
//! use support_center::manager::TicketManager;
//! use support_center::storage::InMemoryStorage;
//!
//! let manager = TicketManager::new(InMemoryStorage::new());
//!
//! let ticket = manager.add_ticket(23, "My printer prints blank pages")?;
//! manager.add_ticket_response(ticket.number, "Is the toner empty?", false)?;
//! manager.add_ticket_response(ticket.number, "No, it is new", true)?;
//!
//! let ticket = manager.get_ticket(ticket.number)?;
//! assert_eq!(ticket.state, TicketState::ClientAnswer);
//! assert_eq!(ticket.responses.len(), 2);
//! # Ok::<(), support_center::SupportCenterError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::fn_params_excessive_bools)]
#![allow(clippy::map_unwrap_or)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod manager;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, SupportCenterError};
pub use manager::TicketManager;
