//! Queuewise Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    CallNextRequest, CallNextResponse, CatalogResponse, JoinRequest, JoinResponse, LeaveRequest,
    LeaveResponse, Snapshot, StatsResponse, TicketActionRequest, TicketActionResponse, TicketView,
    ToggleModeResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::time::Duration;

/// Queuewise daemon client
///
/// # Example
///
/// ```no_run
/// use queuewise_sdk::QueuewiseClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QueuewiseClient::connect("http://127.0.0.1:9527").await?;
/// # Ok(())
/// # }
/// ```
pub struct QueuewiseClient {
    client: HttpClient,
}

impl QueuewiseClient {
    /// Connect to the Queuewise daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9527`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Join a service queue by its display name
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use queuewise_sdk::{QueuewiseClient, JoinRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = QueuewiseClient::connect("http://127.0.0.1:9527").await?;
    /// let response = client.join(JoinRequest {
    ///     service: "Teller Services".to_string(),
    ///     category: "Bank & Financial".to_string(),
    ///     arrival_minutes: Some(15),
    ///     customer_name: None,
    /// }).await?;
    ///
    /// println!("Ticket #{}", response.ticket.number);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn join(&self, request: JoinRequest) -> Result<JoinResponse> {
        let response: JoinResponse = self
            .client
            .request("queue.join.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Leave the queue holding `ticket_id`
    pub async fn leave(&self, ticket_id: impl Into<String>) -> Result<LeaveResponse> {
        let request = LeaveRequest {
            ticket_id: ticket_id.into(),
        };
        let response: LeaveResponse = self
            .client
            .request("queue.leave.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    /// Live view of the current user's ticket, `None` once it left the queues
    pub async fn my_ticket(&self) -> Result<Option<TicketView>> {
        let response: Option<TicketView> = self
            .client
            .request("queue.my_ticket.v1", rpc_params![])
            .await?;

        Ok(response)
    }

    pub async fn snapshot(&self) -> Result<Snapshot> {
        let response: Snapshot = self
            .client
            .request("queue.snapshot.v1", rpc_params![])
            .await?;

        Ok(response)
    }

    pub async fn catalog(&self) -> Result<CatalogResponse> {
        let response: CatalogResponse = self
            .client
            .request("catalog.list.v1", rpc_params![])
            .await?;

        Ok(response)
    }

    /// Serve the next waiting ticket of a service
    pub async fn call_next(&self, service_id: impl Into<String>) -> Result<CallNextResponse> {
        let request = CallNextRequest {
            service_id: service_id.into(),
        };
        let response: CallNextResponse = self
            .client
            .request("admin.call_next.v1", rpc_params![request])
            .await?;

        Ok(response)
    }

    pub async fn complete(
        &self,
        service_id: impl Into<String>,
        ticket_id: impl Into<String>,
    ) -> Result<TicketActionResponse> {
        self.ticket_action("admin.complete.v1", service_id.into(), ticket_id.into())
            .await
    }

    pub async fn skip(
        &self,
        service_id: impl Into<String>,
        ticket_id: impl Into<String>,
    ) -> Result<TicketActionResponse> {
        self.ticket_action("admin.skip.v1", service_id.into(), ticket_id.into())
            .await
    }

    pub async fn recall(
        &self,
        service_id: impl Into<String>,
        ticket_id: impl Into<String>,
    ) -> Result<TicketActionResponse> {
        self.ticket_action("admin.recall.v1", service_id.into(), ticket_id.into())
            .await
    }

    pub async fn toggle_mode(&self) -> Result<ToggleModeResponse> {
        let response: ToggleModeResponse = self
            .client
            .request("admin.toggle_mode.v1", rpc_params![])
            .await?;

        Ok(response)
    }

    pub async fn stats(&self) -> Result<StatsResponse> {
        let response: StatsResponse = self
            .client
            .request("admin.stats.v1", rpc_params![])
            .await?;

        Ok(response)
    }

    async fn ticket_action(
        &self,
        method: &str,
        service_id: String,
        ticket_id: String,
    ) -> Result<TicketActionResponse> {
        let request = TicketActionRequest {
            service_id,
            ticket_id,
        };
        let response: TicketActionResponse =
            self.client.request(method, rpc_params![request]).await?;

        Ok(response)
    }
}
