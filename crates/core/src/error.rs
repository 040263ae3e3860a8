// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// True for misses on service or ticket ids
    pub fn is_not_found(&self) -> bool {
        use crate::domain::DomainError;
        matches!(
            self,
            AppError::Domain(DomainError::ServiceNotFound(_) | DomainError::TicketNotFound(_))
        )
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
