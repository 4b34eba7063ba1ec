use crate::config::Config;
use crate::manager::TicketManager;
use crate::storage::TicketRepository;

/// Common context for all handler operations
pub struct HandlerContext {
    pub manager: TicketManager<Box<dyn TicketRepository>>,
}

impl HandlerContext {
    /// Create a handler context over the configured storage
    pub fn new(config: &Config) -> Self {
        Self::with_repository(config.open_storage())
    }

    /// Create a handler context over an explicit repository
    pub fn with_repository(repository: Box<dyn TicketRepository>) -> Self {
        Self {
            manager: TicketManager::new(repository),
        }
    }

    /// Get manager reference
    pub const fn manager(&self) -> &TicketManager<Box<dyn TicketRepository>> {
        &self.manager
    }
}
