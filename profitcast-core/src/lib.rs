//! profitcast-core: Shared infrastructure for Profitcast services.
pub mod config;
pub mod error;
pub mod observability;

pub use serde;
pub use tracing;
