// Queuewise Core - Queue State, Transitions & Ports
// NO transport dependencies: the store is driven by whoever owns it

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
