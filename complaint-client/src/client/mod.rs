//! Client module
//!
//! Transport trait and its implementations, plus the typed complaint API
//! built on top of them.

mod complaints;
pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use complaints::ComplaintApi;
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
