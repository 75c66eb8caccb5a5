mod client;
mod error;

pub use client::Client;
pub use error::{FetchError, FetchErrorKind};

/// Endpoint polled when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/power-status";
