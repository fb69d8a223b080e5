//! Repo Panel Core Library
//!
//! Provides the platform-independent orchestration logic for the repository panel:
//! - Repository list management (`RepositoryService`)
//! - Jira session status derivation (`SessionService`)
//! - Commit / merge-candidate history (`HistoryService`)
//!
//! The backend itself is abstracted behind the [`Gateway`] trait. Two implementations
//! ship with this crate: [`gateway::HttpGateway`] for a remote backend and
//! [`gateway::InMemoryGateway`] for offline demo mode and tests.

pub mod error;
pub mod gateway;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::Gateway;
