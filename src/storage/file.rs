use super::{StoreState, TicketRepository};
use crate::core::{Ticket, TicketNumber, TicketResponse};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Ticket store backed by a single JSON document
///
/// Every operation reads the document, applies one change and writes the
/// whole document back through a temporary file and a rename, so a
/// crash never leaves a half-written store behind. Concurrent writers
/// from different processes are not arbitrated: the last write wins.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for the given file
    ///
    /// The file and its parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store, treating a missing file as an empty store
    pub fn load_state(&self) -> Result<StoreState> {
        if !self.path.exists() {
            return Ok(StoreState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoreState::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the store atomically
    pub fn save_state(&self, state: &StoreState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::trace!(path = %self.path.display(), "Wrote ticket store");
        Ok(())
    }

    /// Apply a change and persist it; nothing is written when the change fails
    fn modify<T>(&self, change: impl FnOnce(&mut StoreState) -> Result<T>) -> Result<T> {
        let mut state = self.load_state()?;
        let value = change(&mut state)?;
        self.save_state(&state)?;
        Ok(value)
    }
}

impl TicketRepository for JsonFileStorage {
    fn create_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        let created = self.modify(|state| Ok(state.create_ticket(ticket)))?;
        tracing::debug!(number = %created.number, path = %self.path.display(), "Stored ticket");
        Ok(created)
    }

    fn read_ticket(&self, number: TicketNumber) -> Result<Ticket> {
        self.load_state()?.read_ticket(number)
    }

    fn read_tickets(&self) -> Result<Vec<Ticket>> {
        Ok(self.load_state()?.read_tickets())
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.modify(|state| state.update_ticket(ticket))
    }

    fn delete_ticket(&self, number: TicketNumber) -> Result<()> {
        self.modify(|state| state.delete_ticket(number))
    }

    fn create_ticket_response(&self, response: TicketResponse) -> Result<TicketResponse> {
        self.modify(|state| state.create_ticket_response(response))
    }

    fn read_ticket_responses_of_ticket(
        &self,
        number: TicketNumber,
    ) -> Result<Vec<TicketResponse>> {
        Ok(self.load_state()?.read_ticket_responses_of_ticket(number))
    }

    fn update_ticket_state_to_closed(&self, number: TicketNumber) -> Result<()> {
        self.modify(|state| state.update_ticket_state_to_closed(number))
    }
}
