//! Queuewise SDK - Rust Client Library
//!
//! Provides a convenient client for the Queuewise daemon.
//!
//! # Example
//!
//! ```no_run
//! use queuewise_sdk::{QueuewiseClient, JoinRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QueuewiseClient::connect("http://127.0.0.1:9527").await?;
//!
//!     let joined = client.join(JoinRequest {
//!         service: "Teller Services".to_string(),
//!         category: "Bank & Financial".to_string(),
//!         arrival_minutes: None,
//!         customer_name: None,
//!     }).await?;
//!
//!     println!("Your number: {}", joined.ticket.number);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::QueuewiseClient;
pub use error::{Result, SdkError};
pub use types::{
    CallNextRequest, CallNextResponse, CatalogResponse, Category, CategoryService, JoinRequest,
    JoinResponse, LeaveRequest, LeaveResponse, ServiceQueue, Snapshot, StatsResponse, Ticket,
    TicketActionRequest, TicketActionResponse, TicketStatus, TicketView, ToggleModeResponse,
};
