//! Complaint Desk - terminal front end for the complaint backend
//!
//! ```text
//! complaint-desk/src/
//! ├── config.rs   # environment configuration
//! ├── logger.rs   # tracing setup
//! └── render.rs   # plain-text page rendering
//! ```

pub mod config;
pub mod logger;
pub mod render;

pub use config::Config;
pub use logger::{init_logger, init_logger_with_file};
