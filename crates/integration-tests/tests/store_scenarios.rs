//! Queue store scenarios
//!
//! Customer and admin flows driven through the store API.

use std::sync::Arc;

use queuewise_core::application::{JoinRequest, QueueStore, StorePolicy};
use queuewise_core::domain::{Outcome, QueueState, ServiceQueue, Ticket, TicketStatus};
use queuewise_core::port::{SeededRandom, SystemTimeProvider, UuidProvider};

const TELLER: &str = "Teller Services";
const BANK: &str = "Bank & Financial";

fn store(state: QueueState) -> QueueStore {
    QueueStore::new(
        state,
        StorePolicy::default(),
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
        Arc::new(SeededRandom::new(2024)),
    )
}

fn empty_teller() -> QueueState {
    QueueState::new(vec![ServiceQueue::new("bank-teller", TELLER, BANK)])
}

/// Join an empty queue: one waiting ticket, counter bumped
#[tokio::test]
async fn test_join_empty_teller_queue() {
    let store = store(empty_teller());
    let before = store.service("bank-teller").await.unwrap().total_today;

    let receipt = store.join_queue(JoinRequest::new(TELLER, BANK)).await.unwrap();

    let queue = store.service("bank-teller").await.unwrap();
    assert_eq!(receipt.ticket.status, TicketStatus::Waiting);
    assert_eq!(queue.active.len(), 1);
    assert_eq!(queue.total_today, before + 1);
}

/// Serving ticket A is replaced by waiting ticket B
#[tokio::test]
async fn test_call_next_replaces_served_ticket() {
    let mut teller = ServiceQueue::new("bank-teller", TELLER, BANK);
    teller.push_ticket(
        Ticket::new("A", 4, TELLER, BANK, 0, 10).with_status(TicketStatus::BeingServed),
    );
    teller.push_ticket(Ticket::new("B", 9, TELLER, BANK, 0, 10));
    let store = store(QueueState::new(vec![teller]));

    store.call_next("bank-teller").await.unwrap();

    let queue = store.service("bank-teller").await.unwrap();
    assert!(queue.ticket("A").is_none());
    assert_eq!(queue.ticket("B").unwrap().status, TicketStatus::BeingServed);
    assert_eq!(queue.current_serving, 9);
}

/// Skip then recall restores waiting without touching identity
#[tokio::test]
async fn test_skip_then_recall() {
    let store = store(empty_teller());
    let ticket = store
        .join_queue(JoinRequest::new(TELLER, BANK))
        .await
        .unwrap()
        .ticket;

    store.skip_queue("bank-teller", &ticket.id).await.unwrap();
    let skipped = store.service("bank-teller").await.unwrap();
    assert_eq!(skipped.ticket(&ticket.id).unwrap().status, TicketStatus::Missed);

    store.recall_queue("bank-teller", &ticket.id).await.unwrap();
    let recalled = store.service("bank-teller").await.unwrap();
    let t = recalled.ticket(&ticket.id).unwrap();
    assert_eq!(t.status, TicketStatus::Waiting);
    assert_eq!(t.id, ticket.id);
    assert_eq!(t.number, ticket.number);
}

/// Call-next with nobody waiting changes nothing
#[tokio::test]
async fn test_call_next_with_no_waiting_tickets() {
    let mut teller = ServiceQueue::new("bank-teller", TELLER, BANK);
    teller.current_serving = 17;
    teller.push_ticket(Ticket::new("M", 3, TELLER, BANK, 0, 10).with_status(TicketStatus::Missed));
    let store = store(QueueState::new(vec![teller]));
    let before = store.service("bank-teller").await.unwrap();

    let receipt = store.call_next("bank-teller").await.unwrap();

    assert_eq!(receipt.outcome, Outcome::Unchanged);
    assert_eq!(store.service("bank-teller").await.unwrap(), before);
}

/// Leaving twice looks the same as leaving once
#[tokio::test]
async fn test_leave_is_idempotent() {
    let store = store(empty_teller());
    let ticket = store
        .join_queue(JoinRequest::new(TELLER, BANK))
        .await
        .unwrap()
        .ticket;

    store.leave_queue(&ticket.id).await.unwrap();
    let once = store.snapshot().await;

    store.leave_queue(&ticket.id).await.unwrap();
    let twice = store.snapshot().await;

    assert_eq!(*once, *twice);
    assert!(twice.current_ticket_id.is_none());
}

/// After many joins and calls the queue stays sorted with one ticket served
#[tokio::test]
async fn test_invariants_hold_across_a_session() {
    let store = store(empty_teller());

    for round in 0..30 {
        store.join_queue(JoinRequest::new(TELLER, BANK)).await.unwrap();
        if round % 3 == 0 {
            store.call_next("bank-teller").await.unwrap();
        }

        let queue = store.service("bank-teller").await.unwrap();
        assert!(queue.is_sorted(), "queue out of order at round {}", round);
        assert!(queue.being_served().count() <= 1);
    }

    let queue = store.service("bank-teller").await.unwrap();
    assert_eq!(queue.total_today, 30);
}

/// The customer view tracks admin actions on the same ticket
#[tokio::test]
async fn test_customer_view_follows_admin_actions() {
    let store = store(empty_teller());
    let mine = store
        .join_queue(JoinRequest::new(TELLER, BANK))
        .await
        .unwrap()
        .ticket;

    store.call_next("bank-teller").await.unwrap();
    let view = store.current_user_ticket().await.unwrap();
    assert_eq!(view.ticket.status, TicketStatus::BeingServed);
    assert_eq!(view.current_serving, mine.number);

    // Another customer is called; the served ticket is dropped
    store.join_queue(JoinRequest::new(TELLER, BANK)).await.unwrap();
    store.call_next("bank-teller").await.unwrap();

    let snapshot = store.snapshot().await;
    assert!(snapshot.find_ticket(&mine.id).is_none());
}
