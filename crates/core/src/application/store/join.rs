// Join Use Case - request validation and ticket creation

use crate::application::constants::*;
use crate::application::store::StorePolicy;
use crate::domain::error::{DomainError, Result};
use crate::domain::Ticket;
use crate::port::{IdProvider, RandomSource, TimeProvider};
use serde::{Deserialize, Serialize};

/// Join request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Service queue name, e.g. "Teller Services"
    pub service: String,
    pub category: String,

    /// Minutes until the customer expects to arrive
    #[serde(default)]
    pub arrival_minutes: Option<u32>,

    #[serde(default)]
    pub customer_name: Option<String>,
}

impl JoinRequest {
    pub fn new(service: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            category: category.into(),
            arrival_minutes: None,
            customer_name: None,
        }
    }

    pub fn arriving_in(mut self, minutes: u32) -> Self {
        self.arrival_minutes = Some(minutes);
        self
    }

    pub fn for_customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }
}

/// Validate a join request. Lenient policies accept everything.
pub fn validate_request(req: &JoinRequest, policy: &StorePolicy) -> Result<()> {
    if !policy.strict {
        return Ok(());
    }

    if req.service.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "Service name cannot be empty".to_string(),
        ));
    }

    if let Some(minutes) = req.arrival_minutes {
        if minutes > policy.max_arrival_minutes {
            return Err(DomainError::ValidationError(format!(
                "Arrival offset {} min out of range (0..={})",
                minutes, policy.max_arrival_minutes
            )));
        }
    }

    Ok(())
}

/// Create the ticket a join will insert
///
/// # Arguments
///
/// * `req` - Join request
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `random` - Source for the display number and wait estimate
pub fn build_ticket(
    req: &JoinRequest,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    random: &dyn RandomSource,
) -> Ticket {
    let now = time_provider.now_millis();
    let number = random.range_inclusive(TICKET_NUMBER_MIN, TICKET_NUMBER_MAX);
    let estimated_wait = random.range_inclusive(JOIN_WAIT_MIN, JOIN_WAIT_MAX);

    let mut ticket = Ticket::new(
        id_provider.generate_id(),
        number,
        req.service.clone(),
        req.category.clone(),
        now,
        estimated_wait,
    );

    // Zero means arriving now, which carries no estimate
    if let Some(minutes) = req.arrival_minutes.filter(|m| *m > 0) {
        ticket = ticket.with_arrival_at(now + i64::from(minutes) * MILLIS_PER_MINUTE);
    }
    if let Some(name) = &req.customer_name {
        ticket = ticket.with_customer_name(name.clone());
    }

    ticket
}
