// Session seeding
//
// The set of service queues is fixed when the store is created. Counters
// start at plausible random values, optionally with a few mock tickets.

use crate::application::constants::*;
use crate::domain::{CatalogEntry, QueueState, ServiceQueue, Ticket, TicketStatus};
use crate::port::{IdProvider, RandomSource, TimeProvider};
use tracing::debug;

/// Seeding options
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Fill each queue with mock tickets
    pub mock_tickets: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self { mock_tickets: true }
    }
}

/// Build the initial state for `entries`
pub fn seed_state(
    entries: &[CatalogEntry],
    options: SeedOptions,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    random: &dyn RandomSource,
) -> QueueState {
    let now = time_provider.now_millis();

    let queues = entries
        .iter()
        .map(|entry| {
            let mut queue = ServiceQueue::new(entry.id, entry.name, entry.category);
            queue.current_serving = random.range_inclusive(SEED_SERVING_MIN, SEED_SERVING_MAX);
            queue.total_today =
                u64::from(random.range_inclusive(SEED_TOTAL_TODAY_MIN, SEED_TOTAL_TODAY_MAX));
            queue.average_wait_minutes = random.range_inclusive(SEED_AVG_WAIT_MIN, SEED_AVG_WAIT_MAX);

            if options.mock_tickets {
                queue.active = mock_tickets(entry, now, id_provider, random);
            }

            debug!(
                service_id = entry.id,
                tickets = queue.active.len(),
                "Seeded service queue"
            );
            queue
        })
        .collect();

    QueueState::new(queues)
}

/// First generated ticket is being served, the rest wait
fn mock_tickets(
    entry: &CatalogEntry,
    now: i64,
    id_provider: &dyn IdProvider,
    random: &dyn RandomSource,
) -> Vec<Ticket> {
    let size = random.range_inclusive(SEED_QUEUE_SIZE_MIN, SEED_QUEUE_SIZE_MAX);

    let mut tickets: Vec<Ticket> = (0..size)
        .map(|i| {
            let number = random.range_inclusive(TICKET_NUMBER_MIN, TICKET_NUMBER_MAX);
            let joined_at = now - i64::from(random.range_inclusive(0, SEED_JOIN_WINDOW_MS));
            let status = if i == 0 {
                TicketStatus::BeingServed
            } else {
                TicketStatus::Waiting
            };

            Ticket::new(
                id_provider.generate_id(),
                number,
                entry.name,
                entry.category,
                joined_at,
                (i + 1) * 10,
            )
            .with_customer_name(format!("Customer {}", number))
            .with_status(status)
        })
        .collect();

    tickets.sort_by_key(|t| t.number);
    tickets
}
