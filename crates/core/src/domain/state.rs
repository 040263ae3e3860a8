// Queue State - the whole store value

use crate::domain::catalog::{categories, Category};
use crate::domain::queue::{ServiceId, ServiceQueue};
use crate::domain::ticket::{Ticket, TicketId};
use serde::{Deserialize, Serialize};

/// Complete store state.
///
/// The current user's ticket is held by id only. Its live view is looked up
/// in `queues`, so admin actions on the same ticket are always reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueState {
    pub queues: Vec<ServiceQueue>,
    pub current_ticket_id: Option<TicketId>,
    pub is_admin: bool,
}

/// Customer-facing view of one ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketView {
    pub ticket: Ticket,
    pub service_id: ServiceId,
    pub current_serving: u32,
    /// Waiting tickets ordered before this one
    pub people_ahead: usize,
}

impl QueueState {
    pub fn new(queues: Vec<ServiceQueue>) -> Self {
        Self {
            queues,
            current_ticket_id: None,
            is_admin: false,
        }
    }

    pub fn service(&self, service_id: &str) -> Option<&ServiceQueue> {
        self.queues.iter().find(|q| q.id == service_id)
    }

    /// First queue whose display name matches
    pub fn service_by_name(&self, name: &str) -> Option<&ServiceQueue> {
        self.queues.iter().find(|q| q.name == name)
    }

    pub(crate) fn service_mut(&mut self, service_id: &str) -> Option<&mut ServiceQueue> {
        self.queues.iter_mut().find(|q| q.id == service_id)
    }

    pub(crate) fn service_by_name_mut(&mut self, name: &str) -> Option<&mut ServiceQueue> {
        self.queues.iter_mut().find(|q| q.name == name)
    }

    /// Find a ticket in any queue
    pub fn find_ticket(&self, ticket_id: &str) -> Option<(&ServiceQueue, &Ticket)> {
        self.queues
            .iter()
            .find_map(|q| q.ticket(ticket_id).map(|t| (q, t)))
    }

    pub fn ticket_view(&self, ticket_id: &str) -> Option<TicketView> {
        let (queue, ticket) = self.find_ticket(ticket_id)?;
        let people_ahead = queue
            .active
            .iter()
            .take_while(|t| t.id != ticket.id)
            .filter(|t| t.is_waiting())
            .count();

        Some(TicketView {
            ticket: ticket.clone(),
            service_id: queue.id.clone(),
            current_serving: queue.current_serving,
            people_ahead,
        })
    }

    /// Live view of the current user's ticket, if it still exists
    pub fn current_user_ticket(&self) -> Option<TicketView> {
        self.current_ticket_id
            .as_deref()
            .and_then(|id| self.ticket_view(id))
    }

    /// Hosted services grouped by category
    pub fn categories(&self) -> Vec<Category> {
        categories(
            self.queues
                .iter()
                .map(|q| (q.id.as_str(), q.name.as_str(), q.category.as_str())),
        )
    }

    /// Drop the current-user reference if it points at `ticket_id`
    pub(crate) fn forget_current_if(&mut self, ticket_id: &str) {
        if self.current_ticket_id.as_deref() == Some(ticket_id) {
            self.current_ticket_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::TicketStatus;

    fn state() -> QueueState {
        let mut teller = ServiceQueue::new("bank-teller", "Teller Services", "Bank & Financial");
        teller.current_serving = 4;
        teller.push_ticket(
            Ticket::new("a", 1, "Teller Services", "Bank & Financial", 0, 10)
                .with_status(TicketStatus::BeingServed),
        );
        teller.push_ticket(Ticket::new("b", 5, "Teller Services", "Bank & Financial", 0, 10));
        teller.push_ticket(
            Ticket::new("c", 6, "Teller Services", "Bank & Financial", 0, 10)
                .with_status(TicketStatus::Missed),
        );
        teller.push_ticket(Ticket::new("d", 9, "Teller Services", "Bank & Financial", 0, 10));
        QueueState::new(vec![teller])
    }

    #[test]
    fn test_ticket_view_counts_waiting_ahead() {
        let view = state().ticket_view("d").unwrap();

        assert_eq!(view.service_id, "bank-teller");
        assert_eq!(view.current_serving, 4);
        assert_eq!(view.people_ahead, 1);
    }

    #[test]
    fn test_service_lookup_by_name() {
        let state = state();

        assert_eq!(state.service_by_name("Teller Services").unwrap().id, "bank-teller");
        assert!(state.service_by_name("bank-teller").is_none());
    }

    #[test]
    fn test_current_user_ticket_is_derived() {
        let mut state = state();
        state.current_ticket_id = Some("b".to_string());
        assert_eq!(state.current_user_ticket().unwrap().ticket.id, "b");

        // Reference to a ticket that no longer exists resolves to nothing
        state.current_ticket_id = Some("gone".to_string());
        assert!(state.current_user_ticket().is_none());
    }

    #[test]
    fn test_forget_current_only_matching() {
        let mut state = state();
        state.current_ticket_id = Some("b".to_string());

        state.forget_current_if("a");
        assert_eq!(state.current_ticket_id.as_deref(), Some("b"));

        state.forget_current_if("b");
        assert!(state.current_ticket_id.is_none());
    }
}
