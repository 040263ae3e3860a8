//! JSON-RPC Server
//!
//! Serves the queue store over JSON-RPC 2.0 on localhost TCP.

use crate::handler::{RpcHandler, TicketAction};
use crate::types::{CallNextRequest, JoinRequest, LeaveRequest, TicketActionRequest};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use queuewise_core::application::QueueStore;
use serde::de::DeserializeOwned;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9527;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 binds an ephemeral port
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, store: Arc<QueueStore>) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(store)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the server handle.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module().map_err(|e| e.to_string())?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }

    fn build_module(&self) -> Result<RpcModule<()>, jsonrpsee::core::RegisterMethodError> {
        let mut module = RpcModule::new(());

        // Customer APIs
        let handler = self.handler.clone();
        module.register_async_method("queue.join.v1", move |params, _, _| {
            let handler = handler.clone();
            async move {
                let req: JoinRequest = parse_single(&params)?;
                handler.join(req).await
            }
        })?;

        let handler = self.handler.clone();
        module.register_async_method("queue.leave.v1", move |params, _, _| {
            let handler = handler.clone();
            async move {
                let req: LeaveRequest = parse_single(&params)?;
                handler.leave(req).await
            }
        })?;

        let handler = self.handler.clone();
        module.register_async_method("queue.my_ticket.v1", move |_, _, _| {
            let handler = handler.clone();
            async move { handler.my_ticket().await }
        })?;

        let handler = self.handler.clone();
        module.register_async_method("queue.snapshot.v1", move |_, _, _| {
            let handler = handler.clone();
            async move { handler.snapshot().await }
        })?;

        let handler = self.handler.clone();
        module.register_async_method("catalog.list.v1", move |_, _, _| {
            let handler = handler.clone();
            async move { handler.catalog().await }
        })?;

        // Admin APIs
        let handler = self.handler.clone();
        module.register_async_method("admin.call_next.v1", move |params, _, _| {
            let handler = handler.clone();
            async move {
                let req: CallNextRequest = parse_single(&params)?;
                handler.call_next(req).await
            }
        })?;

        for (method, action) in [
            ("admin.complete.v1", TicketAction::Complete),
            ("admin.skip.v1", TicketAction::Skip),
            ("admin.recall.v1", TicketAction::Recall),
        ] {
            let handler = self.handler.clone();
            module.register_async_method(method, move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: TicketActionRequest = parse_single(&params)?;
                    handler.ticket_action(action, req).await
                }
            })?;
        }

        let handler = self.handler.clone();
        module.register_async_method("admin.toggle_mode.v1", move |_, _, _| {
            let handler = handler.clone();
            async move { handler.toggle_mode().await }
        })?;

        let handler = self.handler.clone();
        module.register_async_method("admin.stats.v1", move |_, _, _| {
            let handler = handler.clone();
            async move { handler.stats().await }
        })?;

        Ok(module)
    }
}

/// Accept either `[{..}]` (positional, as the SDK sends) or `{..}` (named)
fn parse_single<T: DeserializeOwned>(params: &Params<'_>) -> Result<T, ErrorObjectOwned> {
    let positional = params
        .as_str()
        .map(|raw| raw.trim_start().starts_with('['))
        .unwrap_or(false);

    if positional {
        params.one()
    } else {
        params.parse()
    }
}
