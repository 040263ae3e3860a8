// Queue Actions and the reducer
//
// `reduce` is pure: it never reads the clock or a random source. Anything
// generated (the new ticket) travels inside the action.

use crate::domain::queue::ServiceId;
use crate::domain::state::QueueState;
use crate::domain::ticket::{Ticket, TicketId, TicketStatus};
use serde::{Deserialize, Serialize};

/// A discrete user or admin gesture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueAction {
    /// Add a prepared ticket to the queue whose name is `ticket.service`
    Join { ticket: Ticket },
    Leave { ticket_id: TicketId },
    CallNext { service_id: ServiceId },
    MarkCompleted { service_id: ServiceId, ticket_id: TicketId },
    Skip { service_id: ServiceId, ticket_id: TicketId },
    Recall { service_id: ServiceId, ticket_id: TicketId },
    ToggleMode,
}

impl QueueAction {
    pub fn name(&self) -> &'static str {
        match self {
            QueueAction::Join { .. } => "join",
            QueueAction::Leave { .. } => "leave",
            QueueAction::CallNext { .. } => "call_next",
            QueueAction::MarkCompleted { .. } => "mark_completed",
            QueueAction::Skip { .. } => "skip",
            QueueAction::Recall { .. } => "recall",
            QueueAction::ToggleMode => "toggle_mode",
        }
    }
}

/// What an action failed to find
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum NotFound {
    /// Service id, or service name for joins
    Service(String),
    Ticket(TicketId),
}

impl std::fmt::Display for NotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFound::Service(key) => write!(f, "service '{}' not found", key),
            NotFound::Ticket(id) => write!(f, "ticket '{}' not found", id),
        }
    }
}

/// Result of applying one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    NotFound { missing: NotFound },
    /// Target found but nothing to do (call-next with no waiting ticket)
    Unchanged,
}

impl Outcome {
    pub fn not_found(missing: NotFound) -> Self {
        Outcome::NotFound { missing }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// New state plus what happened on the way
#[derive(Debug, Clone)]
pub struct Reduction {
    pub state: QueueState,
    pub outcome: Outcome,
    /// Tickets dropped from a queue by this action
    pub removed: Vec<Ticket>,
    /// Ticket promoted to being-served by call-next
    pub promoted: Option<Ticket>,
}

impl Reduction {
    fn applied(state: QueueState) -> Self {
        Self {
            state,
            outcome: Outcome::Applied,
            removed: Vec::new(),
            promoted: None,
        }
    }

    fn miss(state: &QueueState, outcome: Outcome) -> Self {
        Self {
            state: state.clone(),
            outcome,
            removed: Vec::new(),
            promoted: None,
        }
    }
}

/// Compute the next state for `action`.
///
/// Misses never fail: the returned state equals the input and the outcome
/// says what was missing.
pub fn reduce(state: &QueueState, action: &QueueAction) -> Reduction {
    match action {
        QueueAction::Join { ticket } => join(state, ticket),
        QueueAction::Leave { ticket_id } => leave(state, ticket_id),
        QueueAction::CallNext { service_id } => call_next(state, service_id),
        QueueAction::MarkCompleted {
            service_id,
            ticket_id,
        } => mark_completed(state, service_id, ticket_id),
        QueueAction::Skip {
            service_id,
            ticket_id,
        } => set_status(state, service_id, ticket_id, TicketStatus::Missed),
        QueueAction::Recall {
            service_id,
            ticket_id,
        } => set_status(state, service_id, ticket_id, TicketStatus::Waiting),
        QueueAction::ToggleMode => {
            let mut next = state.clone();
            next.is_admin = !next.is_admin;
            Reduction::applied(next)
        }
    }
}

fn join(state: &QueueState, ticket: &Ticket) -> Reduction {
    let mut next = state.clone();
    let Some(queue) = next.service_by_name_mut(&ticket.service) else {
        return Reduction::miss(state, Outcome::not_found(NotFound::Service(ticket.service.clone())));
    };

    queue.push_ticket(ticket.clone());
    queue.total_today += 1;
    next.current_ticket_id = Some(ticket.id.clone());

    Reduction::applied(next)
}

fn leave(state: &QueueState, ticket_id: &str) -> Reduction {
    let mut next = state.clone();
    let removed: Vec<Ticket> = next
        .queues
        .iter_mut()
        .filter_map(|q| q.remove_ticket(ticket_id))
        .collect();

    let had_reference = next.current_ticket_id.as_deref() == Some(ticket_id);
    next.forget_current_if(ticket_id);

    if removed.is_empty() && !had_reference {
        return Reduction::miss(state, Outcome::not_found(NotFound::Ticket(ticket_id.to_string())));
    }

    Reduction {
        removed,
        ..Reduction::applied(next)
    }
}

fn call_next(state: &QueueState, service_id: &str) -> Reduction {
    let mut next = state.clone();
    let Some(queue) = next.service_mut(service_id) else {
        return Reduction::miss(state, Outcome::not_found(NotFound::Service(service_id.to_string())));
    };
    let Some(next_id) = queue.next_waiting().map(|t| t.id.clone()) else {
        return Reduction::miss(state, Outcome::Unchanged);
    };

    // Previous being-served tickets complete and leave the queue; no history is kept.
    let mut removed = Vec::new();
    queue.active.retain(|t| {
        if t.status == TicketStatus::BeingServed {
            let mut done = t.clone();
            done.status = TicketStatus::Completed;
            removed.push(done);
            false
        } else {
            true
        }
    });

    let mut promoted = None;
    if let Some(ticket) = queue.active.iter_mut().find(|t| t.id == next_id) {
        ticket.status = TicketStatus::BeingServed;
        queue.current_serving = ticket.number;
        promoted = Some(ticket.clone());
    }

    for ticket in &removed {
        next.forget_current_if(&ticket.id);
    }

    Reduction {
        removed,
        promoted,
        ..Reduction::applied(next)
    }
}

fn mark_completed(state: &QueueState, service_id: &str, ticket_id: &str) -> Reduction {
    let mut next = state.clone();
    let Some(queue) = next.service_mut(service_id) else {
        return Reduction::miss(state, Outcome::not_found(NotFound::Service(service_id.to_string())));
    };
    let Some(ticket) = queue.remove_ticket(ticket_id) else {
        return Reduction::miss(state, Outcome::not_found(NotFound::Ticket(ticket_id.to_string())));
    };

    next.forget_current_if(ticket_id);

    Reduction {
        removed: vec![ticket],
        ..Reduction::applied(next)
    }
}

fn set_status(
    state: &QueueState,
    service_id: &str,
    ticket_id: &str,
    status: TicketStatus,
) -> Reduction {
    let mut next = state.clone();
    let Some(queue) = next.service_mut(service_id) else {
        return Reduction::miss(state, Outcome::not_found(NotFound::Service(service_id.to_string())));
    };
    if !queue.set_status(ticket_id, status) {
        return Reduction::miss(state, Outcome::not_found(NotFound::Ticket(ticket_id.to_string())));
    }

    Reduction::applied(next)
}
