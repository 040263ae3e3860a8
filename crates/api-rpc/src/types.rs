//! RPC Request/Response Types
//!
//! Defines the JSON-RPC method parameters and results.

use queuewise_core::domain::{Category, QueueStats, Ticket};
use serde::{Deserialize, Serialize};

/// queue.join.v1 - Join a service queue
#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub service: String,
    pub category: String,
    #[serde(default)]
    pub arrival_minutes: Option<u32>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    pub ticket: Ticket,
    /// False when no queue carries the requested name
    pub applied: bool,
}

/// queue.leave.v1 - Leave whichever queue holds the ticket
#[derive(Debug, Deserialize)]
pub struct LeaveRequest {
    pub ticket_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveResponse {
    pub ticket_id: String,
    pub applied: bool,
}

/// admin.call_next.v1 - Serve the next waiting ticket
#[derive(Debug, Deserialize)]
pub struct CallNextRequest {
    pub service_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallNextResponse {
    pub service_id: String,
    pub applied: bool,
    pub now_serving: Option<Ticket>,
    pub dropped: Vec<Ticket>,
}

/// admin.complete.v1 / admin.skip.v1 / admin.recall.v1
#[derive(Debug, Deserialize)]
pub struct TicketActionRequest {
    pub service_id: String,
    pub ticket_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketActionResponse {
    pub service_id: String,
    pub ticket_id: String,
    pub applied: bool,
}

/// admin.toggle_mode.v1
#[derive(Debug, Clone, Serialize)]
pub struct ToggleModeResponse {
    pub is_admin: bool,
}

/// admin.stats.v1
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: QueueStats,
    pub uptime_seconds: u64,
}

/// catalog.list.v1
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<Category>,
}
