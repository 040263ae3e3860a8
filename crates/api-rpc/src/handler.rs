//! RPC Method Handlers
//!
//! Translates each JSON-RPC method into one queue store action.

use crate::error::to_rpc_error;
use crate::types::{
    CallNextRequest, CallNextResponse, CatalogResponse, JoinRequest, JoinResponse, LeaveRequest,
    LeaveResponse, StatsResponse, TicketActionRequest, TicketActionResponse, ToggleModeResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use queuewise_core::application::{self, QueueStore};
use queuewise_core::domain::{Outcome, QueueState, TicketView};
use queuewise_core::error::AppError;
use std::sync::Arc;

/// Which admin action a ticket request maps to
#[derive(Debug, Clone, Copy)]
pub enum TicketAction {
    Complete,
    Skip,
    Recall,
}

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    store: Arc<QueueStore>,
    start_time: std::time::Instant,
}

impl RpcHandler {
    pub fn new(store: Arc<QueueStore>) -> Self {
        Self {
            store,
            start_time: std::time::Instant::now(),
        }
    }

    /// queue.join.v1
    pub async fn join(&self, params: JoinRequest) -> Result<JoinResponse, ErrorObjectOwned> {
        let mut req = application::JoinRequest::new(params.service, params.category);
        req.arrival_minutes = params.arrival_minutes;
        req.customer_name = params.customer_name;

        let receipt = self.store.join_queue(req).await.map_err(to_rpc_error)?;

        Ok(JoinResponse {
            applied: receipt.outcome.is_applied(),
            ticket: receipt.ticket,
        })
    }

    /// queue.leave.v1
    pub async fn leave(&self, params: LeaveRequest) -> Result<LeaveResponse, ErrorObjectOwned> {
        self.require("ticket_id", &params.ticket_id)?;

        let outcome = self
            .store
            .leave_queue(&params.ticket_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(LeaveResponse {
            ticket_id: params.ticket_id,
            applied: outcome.is_applied(),
        })
    }

    /// queue.my_ticket.v1
    pub async fn my_ticket(&self) -> Result<Option<TicketView>, ErrorObjectOwned> {
        Ok(self.store.current_user_ticket().await)
    }

    /// queue.snapshot.v1
    pub async fn snapshot(&self) -> Result<QueueState, ErrorObjectOwned> {
        Ok(self.store.snapshot().await.as_ref().clone())
    }

    /// admin.call_next.v1
    pub async fn call_next(
        &self,
        params: CallNextRequest,
    ) -> Result<CallNextResponse, ErrorObjectOwned> {
        self.require("service_id", &params.service_id)?;

        let receipt = self
            .store
            .call_next(&params.service_id)
            .await
            .map_err(to_rpc_error)?;

        Ok(CallNextResponse {
            service_id: params.service_id,
            applied: receipt.outcome.is_applied(),
            now_serving: receipt.now_serving,
            dropped: receipt.dropped,
        })
    }

    /// admin.complete.v1, admin.skip.v1, admin.recall.v1
    pub async fn ticket_action(
        &self,
        action: TicketAction,
        params: TicketActionRequest,
    ) -> Result<TicketActionResponse, ErrorObjectOwned> {
        self.require("service_id", &params.service_id)?;
        self.require("ticket_id", &params.ticket_id)?;

        let (service_id, ticket_id) = (params.service_id.as_str(), params.ticket_id.as_str());
        let outcome: Outcome = match action {
            TicketAction::Complete => self.store.mark_completed(service_id, ticket_id).await,
            TicketAction::Skip => self.store.skip_queue(service_id, ticket_id).await,
            TicketAction::Recall => self.store.recall_queue(service_id, ticket_id).await,
        }
        .map_err(to_rpc_error)?;

        Ok(TicketActionResponse {
            applied: outcome.is_applied(),
            service_id: params.service_id,
            ticket_id: params.ticket_id,
        })
    }

    /// admin.toggle_mode.v1
    pub async fn toggle_mode(&self) -> Result<ToggleModeResponse, ErrorObjectOwned> {
        let is_admin = self.store.toggle_mode().await.map_err(to_rpc_error)?;
        Ok(ToggleModeResponse { is_admin })
    }

    /// admin.stats.v1
    pub async fn stats(&self) -> Result<StatsResponse, ErrorObjectOwned> {
        Ok(StatsResponse {
            stats: self.store.stats().await,
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }

    /// catalog.list.v1
    pub async fn catalog(&self) -> Result<CatalogResponse, ErrorObjectOwned> {
        Ok(CatalogResponse {
            categories: self.store.snapshot().await.categories(),
        })
    }
}

impl RpcHandler {
    /// Strict stores reject blank ids; lenient ones let them miss quietly
    fn require(&self, field: &str, value: &str) -> Result<(), ErrorObjectOwned> {
        if self.store.policy().strict && value.trim().is_empty() {
            return Err(to_rpc_error(AppError::Validation(format!(
                "{} cannot be empty",
                field
            ))));
        }
        Ok(())
    }
}
