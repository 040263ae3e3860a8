// Ticket Domain Model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Ticket ID (UUID v4 in production)
pub type TicketId = String;

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Waiting,
    OnTheWay,
    BeingServed,
    Completed,
    Missed,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Waiting => write!(f, "waiting"),
            TicketStatus::OnTheWay => write!(f, "on-the-way"),
            TicketStatus::BeingServed => write!(f, "being-served"),
            TicketStatus::Completed => write!(f, "completed"),
            TicketStatus::Missed => write!(f, "missed"),
        }
    }
}

/// One customer's place in a service queue.
///
/// `number` is a display number only. It is drawn at random when the ticket
/// is created and is not unique, so tickets are always addressed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Name of the hosting service queue
    pub service: String,
    pub service_category: String,

    pub joined_at: i64, // epoch ms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival_at: Option<i64>, // epoch ms

    pub status: TicketStatus,

    /// Advisory only
    pub estimated_wait_minutes: u32,
}

impl Ticket {
    /// Create a waiting ticket
    ///
    /// # Arguments
    ///
    /// * `id` - Unique ticket ID (injected, not generated)
    /// * `number` - Display number
    /// * `service` - Name of the target service queue
    /// * `service_category` - Category of that service
    /// * `joined_at` - Creation timestamp in epoch ms (injected, not system time)
    /// * `estimated_wait_minutes` - Advisory wait estimate
    pub fn new(
        id: impl Into<String>,
        number: u32,
        service: impl Into<String>,
        service_category: impl Into<String>,
        joined_at: i64,
        estimated_wait_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            number,
            customer_name: None,
            service: service.into(),
            service_category: service_category.into(),
            joined_at,
            estimated_arrival_at: None,
            status: TicketStatus::Waiting,
            estimated_wait_minutes,
        }
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn with_arrival_at(mut self, arrival_at: i64) -> Self {
        self.estimated_arrival_at = Some(arrival_at);
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_waiting(&self) -> bool {
        self.status == TicketStatus::Waiting
    }

    /// Join time as local wall-clock time
    pub fn join_time_display(&self) -> String {
        format_clock(self.joined_at)
    }

    pub fn estimated_arrival_display(&self) -> Option<String> {
        self.estimated_arrival_at.map(format_clock)
    }
}

/// Format epoch millis as local `HH:MM:SS`
pub fn format_clock(epoch_millis: i64) -> String {
    match DateTime::from_timestamp_millis(epoch_millis) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => String::from("--:--:--"),
    }
}
