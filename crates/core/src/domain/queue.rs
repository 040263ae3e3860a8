// Service Queue Domain Model

use crate::domain::ticket::{Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Service queue identifier (e.g. "bank-teller")
pub type ServiceId = String;

/// One queue line, e.g. "Teller Services" under "Bank & Financial"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceQueue {
    pub id: ServiceId,
    pub name: String,
    pub category: String,

    /// Display only, not tied to any ticket in `active`
    pub current_serving: u32,
    /// Tickets ever joined this session
    pub total_today: u64,
    pub average_wait_minutes: u32,

    /// Kept sorted ascending by ticket number
    pub active: Vec<Ticket>,
}

impl ServiceQueue {
    /// Create an empty queue
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            current_serving: 0,
            total_today: 0,
            average_wait_minutes: 0,
            active: Vec::new(),
        }
    }

    pub fn ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.active.iter().find(|t| t.id == ticket_id)
    }

    pub fn contains(&self, ticket_id: &str) -> bool {
        self.ticket(ticket_id).is_some()
    }

    /// First waiting ticket in queue order
    pub fn next_waiting(&self) -> Option<&Ticket> {
        self.active.iter().find(|t| t.is_waiting())
    }

    pub fn being_served(&self) -> impl Iterator<Item = &Ticket> {
        self.active
            .iter()
            .filter(|t| t.status == TicketStatus::BeingServed)
    }

    pub fn count_by_status(&self, status: TicketStatus) -> usize {
        self.active.iter().filter(|t| t.status == status).count()
    }

    /// Append a ticket and restore number order
    pub fn push_ticket(&mut self, ticket: Ticket) {
        self.active.push(ticket);
        self.sort_active();
    }

    /// Stable sort, so equal numbers keep arrival order
    pub fn sort_active(&mut self) {
        self.active.sort_by_key(|t| t.number);
    }

    /// Remove a ticket by id, returning it if present
    pub fn remove_ticket(&mut self, ticket_id: &str) -> Option<Ticket> {
        let index = self.active.iter().position(|t| t.id == ticket_id)?;
        Some(self.active.remove(index))
    }

    /// Set a ticket's status in place. Returns false if the ticket is absent.
    pub fn set_status(&mut self, ticket_id: &str, status: TicketStatus) -> bool {
        match self.active.iter_mut().find(|t| t.id == ticket_id) {
            Some(ticket) => {
                ticket.status = status;
                true
            }
            None => false,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.active.windows(2).all(|w| w[0].number <= w[1].number)
    }
}
