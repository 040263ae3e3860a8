// Application Layer - Store ownership and use cases

pub mod constants;
pub mod seed;
pub mod store;

// Re-exports
pub use seed::{seed_state, SeedOptions};
pub use store::{CallNextReceipt, JoinReceipt, JoinRequest, QueueStore, StorePolicy};
