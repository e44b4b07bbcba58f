//! Data models
//!
//! Wire types exchanged with the complaint backend and the normalized
//! record the query engine works on. All JSON is camelCase.

pub mod action;
pub mod complaint;
pub mod detail;
pub mod status;
pub mod submission;

// Re-exports
pub use action::*;
pub use complaint::*;
pub use detail::*;
pub use status::*;
pub use submission::*;
