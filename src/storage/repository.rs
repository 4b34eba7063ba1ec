use crate::core::{Ticket, TicketNumber, TicketResponse};
use crate::error::Result;

/// Repository trait for ticket storage operations
///
/// This is the persistence contract consumed by the ticket manager.
/// Implementations assign identifiers, report absent tickets as
/// `TicketNotFound`, and keep responses in insertion order.
#[cfg_attr(test, mockall::automock)]
pub trait TicketRepository: Send + Sync {
    /// Assigns a number to the ticket, persists it and returns the stored record
    fn create_ticket(&self, ticket: Ticket) -> Result<Ticket>;

    /// Loads a ticket by number, including its responses
    fn read_ticket(&self, number: TicketNumber) -> Result<Ticket>;

    /// Loads all tickets in storage order
    fn read_tickets(&self) -> Result<Vec<Ticket>>;

    /// Replaces the stored ticket record
    ///
    /// `date_opened` and the response collection are kept as stored;
    /// responses only grow through [`TicketRepository::create_ticket_response`].
    fn update_ticket(&self, ticket: &Ticket) -> Result<()>;

    /// Deletes a ticket and its responses
    fn delete_ticket(&self, number: TicketNumber) -> Result<()>;

    /// Assigns an id to the response and appends it to its ticket
    fn create_ticket_response(&self, response: TicketResponse) -> Result<TicketResponse>;

    /// Responses of a ticket; empty when the ticket has none or does not exist
    fn read_ticket_responses_of_ticket(&self, number: TicketNumber)
    -> Result<Vec<TicketResponse>>;

    /// Sets the ticket state to closed
    fn update_ticket_state_to_closed(&self, number: TicketNumber) -> Result<()>;
}

impl<R: TicketRepository + ?Sized> TicketRepository for Box<R> {
    fn create_ticket(&self, ticket: Ticket) -> Result<Ticket> {
        (**self).create_ticket(ticket)
    }

    fn read_ticket(&self, number: TicketNumber) -> Result<Ticket> {
        (**self).read_ticket(number)
    }

    fn read_tickets(&self) -> Result<Vec<Ticket>> {
        (**self).read_tickets()
    }

    fn update_ticket(&self, ticket: &Ticket) -> Result<()> {
        (**self).update_ticket(ticket)
    }

    fn delete_ticket(&self, number: TicketNumber) -> Result<()> {
        (**self).delete_ticket(number)
    }

    fn create_ticket_response(&self, response: TicketResponse) -> Result<TicketResponse> {
        (**self).create_ticket_response(response)
    }

    fn read_ticket_responses_of_ticket(
        &self,
        number: TicketNumber,
    ) -> Result<Vec<TicketResponse>> {
        (**self).read_ticket_responses_of_ticket(number)
    }

    fn update_ticket_state_to_closed(&self, number: TicketNumber) -> Result<()> {
        (**self).update_ticket_state_to_closed(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TicketBuilder, TicketResponseBuilder, TicketState};
    use crate::storage::{InMemoryStorage, JsonFileStorage};
    use tempfile::TempDir;

    /// Runs the same contract checks against any repository
    fn exercise_contract(repo: &dyn TicketRepository) {
        let first = repo
            .create_ticket(TicketBuilder::new().account_id(1).text("First").build())
            .expect("Failed to create ticket");
        let second = repo
            .create_ticket(TicketBuilder::new().account_id(2).text("Second").build())
            .expect("Failed to create ticket");
        assert_eq!(first.number, TicketNumber::new(1));
        assert_eq!(second.number, TicketNumber::new(2));

        // Storage order is creation order
        let all = repo.read_tickets().expect("Failed to read tickets");
        let texts: Vec<_> = all.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Second"]);

        // Responses keep insertion order
        for text in ["one", "two", "three"] {
            repo.create_ticket_response(
                TicketResponseBuilder::new()
                    .ticket_number(first.number)
                    .text(text)
                    .build(),
            )
            .expect("Failed to create response");
        }
        let responses = repo
            .read_ticket_responses_of_ticket(first.number)
            .expect("Failed to read responses");
        let texts: Vec<_> = responses.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(responses.iter().all(|r| r.ticket_number == first.number));
        assert!(
            repo.read_ticket_responses_of_ticket(second.number)
                .expect("Failed to read responses")
                .is_empty()
        );

        // Update keeps responses and date_opened
        let mut changed = first.clone();
        changed.text = "First, edited".to_string();
        changed.state = TicketState::Answered;
        changed.responses.clear();
        changed.date_opened = chrono::Utc::now() + chrono::Duration::days(1);
        repo.update_ticket(&changed).expect("Failed to update ticket");
        let reloaded = repo.read_ticket(first.number).expect("Failed to read ticket");
        assert_eq!(reloaded.text, "First, edited");
        assert_eq!(reloaded.state, TicketState::Answered);
        assert_eq!(reloaded.date_opened, first.date_opened);
        assert_eq!(reloaded.responses.len(), 3);

        repo.update_ticket_state_to_closed(second.number)
            .expect("Failed to close ticket");
        assert_eq!(
            repo.read_ticket(second.number).unwrap().state,
            TicketState::Closed
        );

        // Absence is reported, never silently ignored
        let missing = TicketNumber::new(99);
        assert!(repo.read_ticket(missing).unwrap_err().is_not_found());
        assert!(repo.delete_ticket(missing).unwrap_err().is_not_found());
        assert!(
            repo.update_ticket_state_to_closed(missing)
                .unwrap_err()
                .is_not_found()
        );
        let mut ghost = first.clone();
        ghost.number = missing;
        assert!(repo.update_ticket(&ghost).unwrap_err().is_not_found());
        assert!(
            repo.read_ticket_responses_of_ticket(missing)
                .expect("Unknown ticket has no responses")
                .is_empty()
        );

        repo.delete_ticket(first.number).expect("Failed to delete");
        assert!(repo.read_ticket(first.number).unwrap_err().is_not_found());
        assert!(
            repo.read_ticket_responses_of_ticket(first.number)
                .unwrap()
                .is_empty()
        );

        // Numbers are not reused after deletion
        let third = repo
            .create_ticket(TicketBuilder::new().text("Third").build())
            .unwrap();
        assert_eq!(third.number, TicketNumber::new(3));
    }

    #[test]
    fn test_in_memory_repository_contract() {
        exercise_contract(&InMemoryStorage::new());
    }

    #[test]
    fn test_file_repository_contract() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("tickets.json"));
        exercise_contract(&storage);
    }

    #[test]
    fn test_boxed_repository_delegates() {
        let boxed: Box<dyn TicketRepository> = Box::new(InMemoryStorage::new());
        exercise_contract(&boxed);
    }
}
