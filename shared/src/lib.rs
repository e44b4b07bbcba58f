//! Shared types for the complaint desk
//!
//! Domain models, ingestion of upstream collections, identifier
//! resolution, error codes and the complaint query engine. Everything here
//! is synchronous and free of I/O.

pub mod client;
pub mod error;
pub mod identifier;
pub mod models;
pub mod normalize;
pub mod query;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use client::{AgentProfile, Scope};
pub use error::{AppError, AppResult, ErrorCode};
pub use identifier::{ComplaintKey, IdentifierError};
pub use models::{ComplaintRecord, ComplaintStatus};
pub use normalize::{NormalizedBatch, SkipReason, SkippedRecord, UNCATEGORIZED, normalize_all};
pub use query::{ComplaintPage, DEFAULT_PAGE_SIZE, QueryState, SortKey, run_query};
