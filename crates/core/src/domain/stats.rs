// Dashboard statistics

use crate::domain::state::QueueState;
use crate::domain::ticket::TicketStatus;
use serde::{Deserialize, Serialize};

/// Admin dashboard overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    /// Tickets currently in any queue, whatever their status
    pub total_waiting: usize,
    pub served_today: u64,
    /// Rounded mean of per-queue averages, 0 without queues
    pub average_wait_minutes: u32,
    pub missed_calls: usize,
    pub being_served: usize,
}

impl QueueStats {
    pub fn from_state(state: &QueueState) -> Self {
        let queues = &state.queues;
        let average_wait_minutes = if queues.is_empty() {
            0
        } else {
            let sum: u64 = queues.iter().map(|q| u64::from(q.average_wait_minutes)).sum();
            let count = queues.len() as u64;
            ((sum + count / 2) / count) as u32
        };

        Self {
            total_waiting: queues.iter().map(|q| q.active.len()).sum(),
            served_today: queues.iter().map(|q| q.total_today).sum(),
            average_wait_minutes,
            missed_calls: queues
                .iter()
                .map(|q| q.count_by_status(TicketStatus::Missed))
                .sum(),
            being_served: queues
                .iter()
                .map(|q| q.count_by_status(TicketStatus::BeingServed))
                .sum(),
        }
    }
}
