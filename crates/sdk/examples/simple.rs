//! Simple SDK Example
//!
//! Walks one ticket through a service queue.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package queuewise-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package queuewise-sdk --example simple
//!    ```

use queuewise_sdk::{JoinRequest, QueuewiseClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Queuewise SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = QueuewiseClient::connect("http://127.0.0.1:9527").await?;
    println!("   ✓ Connected\n");

    // 2. Join a queue
    println!("2. Joining Teller Services...");
    let joined = client
        .join(JoinRequest {
            service: "Teller Services".to_string(),
            category: "Bank & Financial".to_string(),
            arrival_minutes: Some(10),
            customer_name: Some("Example Customer".to_string()),
        })
        .await?;
    println!("   ✓ Ticket #{} ({})\n", joined.ticket.number, joined.ticket.id);

    // 3. Check position
    println!("3. Checking my ticket...");
    if let Some(view) = client.my_ticket().await? {
        println!(
            "   ✓ {} people ahead, now serving #{}\n",
            view.people_ahead, view.current_serving
        );
    }

    // 4. Admin calls the next ticket
    println!("4. Calling next at bank-teller...");
    let called = client.call_next("bank-teller").await?;
    match called.now_serving {
        Some(ticket) => println!("   ✓ Now serving #{}\n", ticket.number),
        None => println!("   ○ Nobody waiting\n"),
    }

    // 5. Leave
    println!("5. Leaving the queue...");
    let left = client.leave(&joined.ticket.id).await?;
    println!("   ✓ Left: {}\n", left.applied);

    Ok(())
}
