//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};

/// Ticket status as reported by the daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Waiting,
    OnTheWay,
    BeingServed,
    Completed,
    Missed,
}

/// A ticket in a service queue
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub number: u32,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub service: String,
    pub service_category: String,
    pub joined_at: i64,
    #[serde(default)]
    pub estimated_arrival_at: Option<i64>,
    pub status: TicketStatus,
    pub estimated_wait_minutes: u32,
}

/// One service queue
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceQueue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub current_serving: u32,
    pub total_today: u64,
    pub average_wait_minutes: u32,
    pub active: Vec<Ticket>,
}

/// Full store snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub queues: Vec<ServiceQueue>,
    pub current_ticket_id: Option<String>,
    pub is_admin: bool,
}

/// Customer view of a ticket
#[derive(Debug, Clone, Deserialize)]
pub struct TicketView {
    pub ticket: Ticket,
    pub service_id: String,
    pub current_serving: u32,
    pub people_ahead: usize,
}

/// Request to join a queue
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequest {
    pub service: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

/// Response from join operation
#[derive(Debug, Clone, Deserialize)]
pub struct JoinResponse {
    pub ticket: Ticket,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequest {
    pub ticket_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaveResponse {
    pub ticket_id: String,
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CallNextRequest {
    pub service_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallNextResponse {
    pub service_id: String,
    pub applied: bool,
    pub now_serving: Option<Ticket>,
    pub dropped: Vec<Ticket>,
}

/// Request addressing one ticket in one service
#[derive(Debug, Clone, Serialize)]
pub struct TicketActionRequest {
    pub service_id: String,
    pub ticket_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TicketActionResponse {
    pub service_id: String,
    pub ticket_id: String,
    pub applied: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToggleModeResponse {
    pub is_admin: bool,
}

/// Dashboard statistics
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub total_waiting: usize,
    pub served_today: u64,
    pub average_wait_minutes: u32,
    pub missed_calls: usize,
    pub being_served: usize,
    pub uptime_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryService {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub name: String,
    pub services: Vec<CategoryService>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    pub categories: Vec<Category>,
}
