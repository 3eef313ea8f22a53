//! flow-core: Shared infrastructure for the file-flow client crates.
pub mod config;
pub mod error;
pub mod observability;

pub use reqwest;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
