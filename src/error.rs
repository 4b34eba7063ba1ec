//! Error types for support-center
//!
//! All fallible operations return [`Result`], whose error side is
//! [`SupportCenterError`]. The presentation layer relies on the helper
//! methods here to decide how a failure is rendered and which exit code
//! the process reports.

use crate::core::TicketNumber;
use thiserror::Error;

/// Result type alias using [`SupportCenterError`]
pub type Result<T> = std::result::Result<T, SupportCenterError>;

/// Main error type for support-center
#[derive(Error, Debug)]
pub enum SupportCenterError {
    /// A field failed validation (emptiness, length)
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// The referenced ticket does not exist
    #[error("Ticket not found: {number}")]
    TicketNotFound { number: TicketNumber },

    /// A required argument was absent
    #[error("Missing required argument: {name}")]
    NullArgument { name: String },

    /// An argument was present but unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("{0}")]
    Custom(String),
}

impl SupportCenterError {
    /// Create a validation error for the given field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a custom error
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Whether the failure was caused by malformed client input
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Whether the failure was caused by a missing ticket
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound { .. })
    }

    /// Whether the caller can fix the input and try again
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::TicketNotFound { .. })
    }

    /// Whether the failure originates from configuration loading
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Message shown to the user on the error line
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { field, message } => format!("Invalid {field}: {message}"),
            Self::TicketNotFound { number } => format!("No such ticket: {number}"),
            Self::Io(e) => format!("Storage could not be accessed: {e}"),
            Self::SerializationError(e) => format!("Storage file is corrupt: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints for fixing the error, if any
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation { field, .. } => vec![format!(
                "Provide a non-empty {field} of at most {} characters",
                crate::core::MAX_TEXT_LENGTH
            )],
            Self::TicketNotFound { .. } => {
                vec!["Run 'support-center list' to see existing tickets".to_string()]
            },
            Self::InvalidArgument(_) => vec!["Ticket numbers are never negative".to_string()],
            Self::Config(_) => vec![
                "Check the configuration file passed with --config".to_string(),
                "Check SUPPORT_CENTER_* environment variables".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Process exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 3,
            Self::TicketNotFound { .. } => 4,
            _ => 1,
        }
    }
}
