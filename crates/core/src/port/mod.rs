// Port Layer - Interfaces for nondeterministic inputs

pub mod id_provider;
pub mod random;
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, UuidProvider};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use time_provider::{SystemTimeProvider, TimeProvider};
