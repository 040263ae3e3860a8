// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<crate::domain::action::NotFound> for DomainError {
    fn from(missing: crate::domain::action::NotFound) -> Self {
        use crate::domain::action::NotFound;
        match missing {
            NotFound::Service(key) => DomainError::ServiceNotFound(key),
            NotFound::Ticket(id) => DomainError::TicketNotFound(id),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
