//! Complaint Client - HTTP client for the complaint backend
//!
//! Typed API over a pluggable transport, the session carrying the bearer
//! credential, and the list-view state machine.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use client::{ComplaintApi, HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::Session;
pub use view::{ComplaintListView, ViewState};

// Re-export shared types for convenience
pub use shared::client::{AgentProfile, Scope};
pub use shared::query::{ComplaintPage, QueryState, SortKey};
