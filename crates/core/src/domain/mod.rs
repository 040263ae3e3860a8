// Domain Layer - Queue state and its transitions

pub mod action;
pub mod catalog;
pub mod error;
pub mod queue;
pub mod state;
pub mod stats;
pub mod ticket;

// Re-exports
pub use action::{reduce, NotFound, Outcome, QueueAction, Reduction};
pub use catalog::{categories, CatalogEntry, Category, CategoryService, DEFAULT_CATALOG};
pub use error::DomainError;
pub use queue::{ServiceId, ServiceQueue};
pub use state::{QueueState, TicketView};
pub use stats::QueueStats;
pub use ticket::{format_clock, Ticket, TicketId, TicketStatus};
