//! Test utilities for support-center
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{
    Ticket, TicketBuilder, TicketNumber, TicketResponse, TicketResponseBuilder, TicketState,
};
use crate::manager::TicketManager;
use crate::storage::{JsonFileStorage, TicketRepository};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for a ticket store in a temporary directory
pub struct TestStore {
    pub temp_dir: TempDir,
    pub data_file: PathBuf,
    pub storage: JsonFileStorage,
}

impl TestStore {
    /// Create an empty store
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("tickets.json");
        let storage = JsonFileStorage::new(&data_file);

        Self {
            temp_dir,
            data_file,
            storage,
        }
    }

    /// Create a store with sample tickets in every state
    pub fn with_sample_tickets() -> Self {
        let store = Self::new();

        let tickets = vec![
            create_test_ticket("Printer is out of toner", TicketState::Open),
            create_test_ticket("Password reset does not arrive", TicketState::Answered),
            create_test_ticket("Laptop will not boot", TicketState::ClientAnswer),
            create_test_ticket("Request a second monitor", TicketState::Closed),
        ];

        for ticket in tickets {
            store
                .storage
                .create_ticket(ticket)
                .expect("Failed to save ticket");
        }

        store
    }

    /// A manager writing to this store
    pub fn manager(&self) -> TicketManager<JsonFileStorage> {
        TicketManager::new(self.storage.clone())
    }
}

/// Create an unsaved ticket in the given state
pub fn create_test_ticket(text: &str, state: TicketState) -> Ticket {
    TicketBuilder::new().account_id(1).text(text).state(state).build()
}

/// Create an unsaved response for a ticket
pub fn create_test_response(ticket: TicketNumber, text: &str, client: bool) -> TicketResponse {
    TicketResponseBuilder::new()
        .ticket_number(ticket)
        .text(text)
        .client_response(client)
        .build()
}

/// Assert that two tickets are equal (ignoring responses)
pub fn assert_tickets_equal(left: &Ticket, right: &Ticket) {
    assert_eq!(left.number, right.number, "Ticket numbers don't match");
    assert_eq!(left.account_id, right.account_id, "Accounts don't match");
    assert_eq!(left.text, right.text, "Ticket texts don't match");
    assert_eq!(
        left.date_opened, right.date_opened,
        "Opening dates don't match"
    );
    assert_eq!(left.state, right.state, "Ticket states don't match");
    assert_eq!(left.kind, right.kind, "Ticket kinds don't match");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let store = TestStore::new();
        assert!(store.temp_dir.path().exists());
        assert!(!store.data_file.exists());
    }

    #[test]
    fn test_store_with_sample_tickets() {
        let store = TestStore::with_sample_tickets();
        let tickets = store.storage.read_tickets().unwrap();
        assert_eq!(tickets.len(), 4);
        assert_eq!(tickets[3].state, TicketState::Closed);
    }

    #[test]
    fn test_manager_sees_store_contents() {
        let store = TestStore::with_sample_tickets();
        let manager = store.manager();

        let response = manager
            .add_ticket_response(4, "A second monitor is on its way", false)
            .unwrap();
        let stored = store.storage.read_ticket(TicketNumber::new(4)).unwrap();

        assert_eq!(stored.state, TicketState::Answered);
        assert_eq!(stored.responses, vec![response]);
    }

    #[test]
    fn test_round_trip_through_file() {
        let store = TestStore::new();
        let created = store
            .manager()
            .add_ticket(12, "Outlook keeps asking for my password")
            .unwrap();

        let reloaded = JsonFileStorage::new(&store.data_file)
            .read_ticket(created.number)
            .unwrap();
        assert_tickets_equal(&created, &reloaded);
    }

    #[test]
    fn test_response_fixture() {
        let store = TestStore::with_sample_tickets();
        let response = store
            .storage
            .create_ticket_response(create_test_response(TicketNumber::new(1), "On it", false))
            .unwrap();
        assert_eq!(response.id, 1);
    }
}
