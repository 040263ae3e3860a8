//! Queuewise CLI - Command-line interface for the Queuewise daemon
//! Customer and admin actions against a running daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9527";

#[derive(Parser)]
#[command(name = "queuewise")]
#[command(about = "Queuewise virtual queue CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "QUEUEWISE_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List services by category
    Services,

    /// Join a service queue
    Join {
        /// Service name (e.g., "Teller Services")
        service: String,

        /// Category; looked up from the catalog when omitted
        #[arg(short, long)]
        category: Option<String>,

        /// Minutes until you arrive
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=120))]
        arrival: Option<u32>,

        /// Customer name shown to staff
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Leave a queue
    Leave {
        /// Ticket ID
        ticket_id: String,
    },

    /// Show your current ticket
    MyTicket,

    /// Show service queues
    Dashboard {
        /// Only this service ID
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Serve the next waiting ticket
    CallNext {
        /// Service ID (e.g., bank-teller)
        service_id: String,
    },

    /// Mark a ticket completed and drop it
    Complete { service_id: String, ticket_id: String },

    /// Mark a ticket missed
    Skip { service_id: String, ticket_id: String },

    /// Restore a missed ticket to waiting
    Recall { service_id: String, ticket_id: String },

    /// Switch between customer and admin mode
    ToggleMode,

    /// Show dashboard statistics
    Stats,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct TicketJson {
    id: String,
    number: u32,
    #[serde(default)]
    customer_name: Option<String>,
    service: String,
    joined_at: i64,
    #[serde(default)]
    estimated_arrival_at: Option<i64>,
    status: String,
    estimated_wait_minutes: u32,
}

#[derive(Deserialize)]
struct ServiceQueueJson {
    id: String,
    name: String,
    category: String,
    current_serving: u32,
    average_wait_minutes: u32,
    active: Vec<TicketJson>,
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "#")]
    number: u32,
    id: String,
    status: String,
    joined: String,
    customer: String,
}

impl From<&TicketJson> for TicketRow {
    fn from(t: &TicketJson) -> Self {
        Self {
            number: t.number,
            id: t.id.clone(),
            status: t.status.clone(),
            joined: clock(t.joined_at),
            customer: t.customer_name.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ServiceRow {
    id: String,
    name: String,
    category: String,
    serving: u32,
    queued: usize,
    #[tabled(rename = "avg wait")]
    avg_wait: String,
}

fn clock(epoch_millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(epoch_millis)
        .map(|utc| {
            utc.with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| "--:--:--".to_string())
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    // A null result is valid (e.g. no current ticket)
    Ok(response.result.unwrap_or(Value::Null))
}

/// Find the category of a service by name
async fn lookup_category(url: &str, service: &str) -> Result<String> {
    let catalog = call_rpc(url, "catalog.list.v1", json!([])).await?;
    let categories = catalog["categories"].as_array().cloned().unwrap_or_default();

    categories
        .iter()
        .find(|c| {
            c["services"]
                .as_array()
                .is_some_and(|s| s.iter().any(|svc| svc["name"] == service))
        })
        .and_then(|c| c["name"].as_str().map(str::to_string))
        .with_context(|| format!("Unknown service '{}'; see `queuewise services`", service))
}

fn report_applied(result: &Value, done: &str, missed: &str) {
    if result["applied"].as_bool().unwrap_or(false) {
        println!("{}", format!("✓ {}", done).green().bold());
    } else {
        println!("{}", format!("○ {}", missed).yellow());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.rpc_url.as_str();

    match cli.command {
        Commands::Services => {
            let catalog = call_rpc(url, "catalog.list.v1", json!([])).await?;

            for category in catalog["categories"].as_array().into_iter().flatten() {
                println!("{}", category["name"].as_str().unwrap_or("?").cyan().bold());
                for service in category["services"].as_array().into_iter().flatten() {
                    println!(
                        "  {} {}",
                        service["name"].as_str().unwrap_or("?"),
                        format!("({})", service["id"].as_str().unwrap_or("?")).dimmed()
                    );
                }
            }
        }

        Commands::Join {
            service,
            category,
            arrival,
            name,
        } => {
            let category = match category {
                Some(category) => category,
                None => lookup_category(url, &service).await?,
            };

            let params = json!([{
                "service": service,
                "category": category,
                "arrival_minutes": arrival,
                "customer_name": name,
            }]);

            let result = call_rpc(url, "queue.join.v1", params).await?;
            let ticket: TicketJson = serde_json::from_value(result["ticket"].clone())?;

            report_applied(
                &result,
                "Joined the queue",
                "No queue with that name; ticket was not placed",
            );
            println!();
            println!("  {} #{}", "Number:".bold(), ticket.number);
            println!("  {} {}", "Ticket ID:".bold(), ticket.id);
            println!("  {} {}", "Service:".bold(), ticket.service);
            println!("  {} {}", "Joined at:".bold(), clock(ticket.joined_at));
            if let Some(arrival_at) = ticket.estimated_arrival_at {
                println!("  {} {}", "Arriving:".bold(), clock(arrival_at));
            }
            println!(
                "  {} ~{} min",
                "Estimated wait:".bold(),
                ticket.estimated_wait_minutes
            );
        }

        Commands::Leave { ticket_id } => {
            let result = call_rpc(url, "queue.leave.v1", json!([{ "ticket_id": ticket_id }])).await?;
            report_applied(
                &result,
                &format!("Ticket {} left the queue", ticket_id),
                &format!("Ticket {} was not in any queue", ticket_id),
            );
        }

        Commands::MyTicket => {
            let result = call_rpc(url, "queue.my_ticket.v1", json!([])).await?;

            if result.is_null() {
                println!("{}", "You are not in a queue".yellow());
            } else {
                let ticket: TicketJson = serde_json::from_value(result["ticket"].clone())?;
                println!("{}", format!("Ticket #{}", ticket.number).cyan().bold());
                println!("  {} {}", "Service:".bold(), ticket.service);
                println!("  {} {}", "Status:".bold(), ticket.status);
                println!("  {} {}", "Now serving:".bold(), result["current_serving"]);
                println!("  {} {}", "People ahead:".bold(), result["people_ahead"]);
                println!("  {} {}", "Joined at:".bold(), clock(ticket.joined_at));
            }
        }

        Commands::Dashboard { service } => {
            let snapshot = call_rpc(url, "queue.snapshot.v1", json!([])).await?;
            let queues: Vec<ServiceQueueJson> =
                serde_json::from_value(snapshot["queues"].clone())?;

            let mode = if snapshot["is_admin"].as_bool().unwrap_or(false) {
                "ADMIN".red()
            } else {
                "CUSTOMER".green()
            };
            println!("{} {}", "Mode:".bold(), mode);
            println!();

            match service {
                None => {
                    let rows: Vec<ServiceRow> = queues
                        .iter()
                        .map(|q| ServiceRow {
                            id: q.id.clone(),
                            name: q.name.clone(),
                            category: q.category.clone(),
                            serving: q.current_serving,
                            queued: q.active.len(),
                            avg_wait: format!("{} min", q.average_wait_minutes),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                Some(service_id) => {
                    let queue = queues
                        .iter()
                        .find(|q| q.id == service_id)
                        .with_context(|| format!("Unknown service ID '{}'", service_id))?;

                    println!(
                        "{} {}",
                        queue.name.cyan().bold(),
                        format!("({})", queue.category).dimmed()
                    );
                    println!("  {} #{}", "Now serving:".bold(), queue.current_serving);
                    println!();
                    let rows: Vec<TicketRow> = queue.active.iter().map(TicketRow::from).collect();
                    println!("{}", Table::new(rows));
                }
            }
        }

        Commands::CallNext { service_id } => {
            let result =
                call_rpc(url, "admin.call_next.v1", json!([{ "service_id": service_id }])).await?;

            match result["now_serving"]["number"].as_u64() {
                Some(number) => println!("{}", format!("✓ Now serving #{}", number).green().bold()),
                None => println!("{}", "○ Nobody is waiting".yellow()),
            }
        }

        Commands::Complete {
            service_id,
            ticket_id,
        } => {
            let params = json!([{ "service_id": service_id, "ticket_id": ticket_id }]);
            let result = call_rpc(url, "admin.complete.v1", params).await?;
            report_applied(&result, "Ticket completed", "Ticket not found in that service");
        }

        Commands::Skip {
            service_id,
            ticket_id,
        } => {
            let params = json!([{ "service_id": service_id, "ticket_id": ticket_id }]);
            let result = call_rpc(url, "admin.skip.v1", params).await?;
            report_applied(&result, "Ticket marked missed", "Ticket not found in that service");
        }

        Commands::Recall {
            service_id,
            ticket_id,
        } => {
            let params = json!([{ "service_id": service_id, "ticket_id": ticket_id }]);
            let result = call_rpc(url, "admin.recall.v1", params).await?;
            report_applied(&result, "Ticket recalled", "Ticket not found in that service");
        }

        Commands::ToggleMode => {
            let result = call_rpc(url, "admin.toggle_mode.v1", json!([])).await?;
            if result["is_admin"].as_bool().unwrap_or(false) {
                println!("{}", "✓ Admin mode".red().bold());
            } else {
                println!("{}", "✓ Customer mode".green().bold());
            }
        }

        Commands::Stats => {
            println!("{}", "Queue Overview".cyan().bold());
            println!();

            match call_rpc(url, "admin.stats.v1", json!([])).await {
                Ok(stats) => {
                    println!("  {} {}", "RPC URL:".bold(), url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("  {} {}", "Total Waiting:".bold(), stats["total_waiting"]);
                    println!("  {} {}", "Served Today:".bold(), stats["served_today"]);
                    println!(
                        "  {} {} min",
                        "Avg Wait Time:".bold(),
                        stats["average_wait_minutes"]
                    );
                    println!("  {} {}", "Missed Calls:".bold(), stats["missed_calls"]);
                    println!("  {} {}", "Being Served:".bold(), stats["being_served"]);
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptime_seconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
