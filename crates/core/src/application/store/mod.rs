// Queue Store - single owner of the queue state
//
// Mutations are serialized by one lock. The state itself is an immutable
// `Arc<QueueState>` that every action replaces, so readers holding a
// snapshot never observe a half-applied action.

pub mod join;

pub use join::JoinRequest;

use crate::application::constants::DEFAULT_MAX_ARRIVAL_MINUTES;
use crate::domain::{
    reduce, DomainError, Outcome, QueueAction, QueueState, QueueStats, ServiceQueue, Ticket,
    TicketView,
};
use crate::error::Result;
use crate::port::{IdProvider, RandomSource, TimeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// How the store treats misses and unchecked input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorePolicy {
    /// Surface misses as `NotFound` errors and validate arrival offsets
    pub strict: bool,
    pub max_arrival_minutes: u32,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            strict: false,
            max_arrival_minutes: DEFAULT_MAX_ARRIVAL_MINUTES,
        }
    }
}

/// Result of a join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReceipt {
    /// Created ticket, returned even when no queue matched
    pub ticket: Ticket,
    pub outcome: Outcome,
}

/// Result of a call-next
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallNextReceipt {
    pub outcome: Outcome,
    pub now_serving: Option<Ticket>,
    /// Previously served ticket, completed and dropped
    pub dropped: Vec<Ticket>,
}

/// What a committed action produced
struct Committed {
    outcome: Outcome,
    removed: Vec<Ticket>,
    promoted: Option<Ticket>,
    /// Admin flag of the state this action left behind
    is_admin: bool,
}

/// Queue Store
pub struct QueueStore {
    state: Mutex<Arc<QueueState>>,
    policy: StorePolicy,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    random: Arc<dyn RandomSource>,
}

impl QueueStore {
    pub fn new(
        initial: QueueState,
        policy: StorePolicy,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            state: Mutex::new(Arc::new(initial)),
            policy,
            id_provider,
            time_provider,
            random,
        }
    }

    pub fn policy(&self) -> StorePolicy {
        self.policy
    }

    /// Current consistent state
    pub async fn snapshot(&self) -> Arc<QueueState> {
        Arc::clone(&*self.state.lock().await)
    }

    /// Join the queue named `req.service`
    pub async fn join_queue(&self, req: JoinRequest) -> Result<JoinReceipt> {
        join::validate_request(&req, &self.policy)?;

        let ticket = join::build_ticket(
            &req,
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            self.random.as_ref(),
        );

        let committed = self
            .dispatch(QueueAction::Join {
                ticket: ticket.clone(),
            })
            .await?;

        info!(
            ticket_id = %ticket.id,
            number = ticket.number,
            service = %ticket.service,
            applied = committed.outcome.is_applied(),
            "Ticket joined"
        );

        Ok(JoinReceipt {
            ticket,
            outcome: committed.outcome,
        })
    }

    /// Remove a ticket from every queue
    pub async fn leave_queue(&self, ticket_id: &str) -> Result<Outcome> {
        let committed = self
            .dispatch(QueueAction::Leave {
                ticket_id: ticket_id.to_string(),
            })
            .await?;

        if committed.outcome.is_applied() {
            info!(ticket_id, removed = committed.removed.len(), "Ticket left");
        }
        Ok(committed.outcome)
    }

    /// Promote the next waiting ticket of a service
    pub async fn call_next(&self, service_id: &str) -> Result<CallNextReceipt> {
        let committed = self
            .dispatch(QueueAction::CallNext {
                service_id: service_id.to_string(),
            })
            .await?;

        if let Some(ticket) = &committed.promoted {
            info!(
                service_id,
                ticket_id = %ticket.id,
                number = ticket.number,
                dropped = committed.removed.len(),
                "Called next ticket"
            );
        }

        Ok(CallNextReceipt {
            outcome: committed.outcome,
            now_serving: committed.promoted,
            dropped: committed.removed,
        })
    }

    pub async fn mark_completed(&self, service_id: &str, ticket_id: &str) -> Result<Outcome> {
        let committed = self
            .dispatch(QueueAction::MarkCompleted {
                service_id: service_id.to_string(),
                ticket_id: ticket_id.to_string(),
            })
            .await?;

        info!(service_id, ticket_id, "Ticket completed");
        Ok(committed.outcome)
    }

    pub async fn skip_queue(&self, service_id: &str, ticket_id: &str) -> Result<Outcome> {
        let committed = self
            .dispatch(QueueAction::Skip {
                service_id: service_id.to_string(),
                ticket_id: ticket_id.to_string(),
            })
            .await?;

        info!(service_id, ticket_id, "Ticket marked missed");
        Ok(committed.outcome)
    }

    pub async fn recall_queue(&self, service_id: &str, ticket_id: &str) -> Result<Outcome> {
        let committed = self
            .dispatch(QueueAction::Recall {
                service_id: service_id.to_string(),
                ticket_id: ticket_id.to_string(),
            })
            .await?;

        info!(service_id, ticket_id, "Ticket recalled");
        Ok(committed.outcome)
    }

    /// Flip admin mode, returning the new value
    pub async fn toggle_mode(&self) -> Result<bool> {
        let is_admin = self.dispatch(QueueAction::ToggleMode).await?.is_admin;

        info!(is_admin, "Mode toggled");
        Ok(is_admin)
    }

    pub async fn is_admin(&self) -> bool {
        self.snapshot().await.is_admin
    }

    /// Live view of the current user's ticket
    pub async fn current_user_ticket(&self) -> Option<TicketView> {
        self.snapshot().await.current_user_ticket()
    }

    pub async fn ticket_view(&self, ticket_id: &str) -> Option<TicketView> {
        self.snapshot().await.ticket_view(ticket_id)
    }

    pub async fn service(&self, service_id: &str) -> Option<ServiceQueue> {
        self.snapshot().await.service(service_id).cloned()
    }

    pub async fn stats(&self) -> QueueStats {
        let state = self.snapshot().await;
        QueueStats::from_state(&state)
    }

    /// Apply one action under the lock and publish the new state
    async fn dispatch(&self, action: QueueAction) -> Result<Committed> {
        let mut guard = self.state.lock().await;
        let reduction = reduce(&guard, &action);
        let is_admin = reduction.state.is_admin;

        match &reduction.outcome {
            Outcome::Applied => {
                *guard = Arc::new(reduction.state);
            }
            Outcome::NotFound { missing } if self.policy.strict => {
                warn!(action = action.name(), %missing, "Action rejected");
                return Err(DomainError::from(missing.clone()).into());
            }
            Outcome::NotFound { missing } => {
                debug!(action = action.name(), %missing, "Action was a no-op");
            }
            Outcome::Unchanged => {
                debug!(action = action.name(), "Nothing to do");
            }
        }

        Ok(Committed {
            is_admin,
            outcome: reduction.outcome,
            removed: reduction.removed,
            promoted: reduction.promoted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TicketStatus, DEFAULT_CATALOG};
    use crate::error::AppError;
    use crate::port::{SeededRandom, SystemTimeProvider, UuidProvider};

    fn teller_only() -> QueueState {
        QueueState::new(vec![ServiceQueue::new(
            "bank-teller",
            "Teller Services",
            "Bank & Financial",
        )])
    }

    fn store_with(state: QueueState, policy: StorePolicy) -> QueueStore {
        QueueStore::new(
            state,
            policy,
            Arc::new(UuidProvider),
            Arc::new(SystemTimeProvider),
            Arc::new(SeededRandom::new(11)),
        )
    }

    fn strict() -> StorePolicy {
        StorePolicy {
            strict: true,
            ..StorePolicy::default()
        }
    }

    #[tokio::test]
    async fn test_join_sets_current_user_ticket() {
        let store = store_with(teller_only(), StorePolicy::default());

        let receipt = store
            .join_queue(JoinRequest::new("Teller Services", "Bank & Financial"))
            .await
            .unwrap();

        assert!(receipt.outcome.is_applied());
        let view = store.current_user_ticket().await.unwrap();
        assert_eq!(view.ticket.id, receipt.ticket.id);
        assert_eq!(view.service_id, "bank-teller");

        let queue = store.service("bank-teller").await.unwrap();
        assert_eq!(queue.total_today, 1);
        assert_eq!(queue.active.len(), 1);
    }

    #[tokio::test]
    async fn test_join_unknown_service_lenient_returns_ticket() {
        let store = store_with(teller_only(), StorePolicy::default());
        let before = store.snapshot().await;

        let receipt = store
            .join_queue(JoinRequest::new("Nowhere", "None"))
            .await
            .unwrap();

        assert!(!receipt.outcome.is_applied());
        assert_eq!(receipt.ticket.status, TicketStatus::Waiting);
        assert_eq!(*store.snapshot().await, *before);
        assert!(store.current_user_ticket().await.is_none());
    }

    #[tokio::test]
    async fn test_strict_join_unknown_service_errors() {
        let store = store_with(teller_only(), strict());

        let err = store
            .join_queue(JoinRequest::new("Nowhere", "None"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::ServiceNotFound(ref name)) if name == "Nowhere"
        ));
    }

    #[tokio::test]
    async fn test_strict_rejects_arrival_offset() {
        let store = store_with(teller_only(), strict());

        let err = store
            .join_queue(JoinRequest::new("Teller Services", "Bank & Financial").arriving_in(500))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::ValidationError(_))));
        assert!(store.service("bank-teller").await.unwrap().active.is_empty());
    }

    #[tokio::test]
    async fn test_admin_removal_invalidates_current_user() {
        let store = store_with(teller_only(), StorePolicy::default());
        let receipt = store
            .join_queue(JoinRequest::new("Teller Services", "Bank & Financial"))
            .await
            .unwrap();

        store
            .mark_completed("bank-teller", &receipt.ticket.id)
            .await
            .unwrap();

        assert!(store.current_user_ticket().await.is_none());
        assert!(store.snapshot().await.current_ticket_id.is_none());
    }

    #[tokio::test]
    async fn test_skip_is_visible_in_current_user_view() {
        let store = store_with(teller_only(), StorePolicy::default());
        let receipt = store
            .join_queue(JoinRequest::new("Teller Services", "Bank & Financial"))
            .await
            .unwrap();

        store
            .skip_queue("bank-teller", &receipt.ticket.id)
            .await
            .unwrap();

        let view = store.current_user_ticket().await.unwrap();
        assert_eq!(view.ticket.status, TicketStatus::Missed);
    }

    #[tokio::test]
    async fn test_call_next_receipt() {
        let store = store_with(teller_only(), StorePolicy::default());
        let first = store
            .join_queue(JoinRequest::new("Teller Services", "Bank & Financial"))
            .await
            .unwrap();

        let receipt = store.call_next("bank-teller").await.unwrap();
        assert_eq!(receipt.now_serving.unwrap().id, first.ticket.id);
        assert!(receipt.dropped.is_empty());

        // Nothing waiting any more
        let again = store.call_next("bank-teller").await.unwrap();
        assert_eq!(again.outcome, Outcome::Unchanged);
        assert!(again.now_serving.is_none());
    }

    #[tokio::test]
    async fn test_strict_unknown_ticket_errors_without_mutation() {
        let store = store_with(teller_only(), strict());

        let err = store.recall_queue("bank-teller", "ghost").await.unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::TicketNotFound(_))));
    }

    #[tokio::test]
    async fn test_leave_unknown_ticket_is_noop() {
        let store = store_with(teller_only(), StorePolicy::default());
        let before = store.snapshot().await;

        let outcome = store.leave_queue("ghost").await.unwrap();

        assert!(!outcome.is_applied());
        assert_eq!(*store.snapshot().await, *before);
    }

    #[tokio::test]
    async fn test_toggle_mode_returns_committed_flag() {
        let store = store_with(teller_only(), StorePolicy::default());

        assert!(store.toggle_mode().await.unwrap());
        assert!(!store.toggle_mode().await.unwrap());
    }

    #[tokio::test]
    async fn test_snapshots_are_immutable() {
        let store = store_with(teller_only(), StorePolicy::default());
        let before = store.snapshot().await;

        store.toggle_mode().await.unwrap();

        assert!(!before.is_admin);
        assert!(store.is_admin().await);
    }

    #[test]
    fn test_stats_on_seeded_catalog() {
        let state = crate::application::seed_state(
            DEFAULT_CATALOG,
            crate::application::SeedOptions::default(),
            &UuidProvider,
            &SystemTimeProvider,
            &SeededRandom::new(5),
        );
        let expected_total: usize = state.queues.iter().map(|q| q.active.len()).sum();
        let store = store_with(state, StorePolicy::default());

        let stats = tokio_test::block_on(store.stats());

        assert_eq!(stats.total_waiting, expected_total);
        assert_eq!(stats.being_served, DEFAULT_CATALOG.len());
    }
}
