//! Client for the Uptime Kuma REST API, authenticated with a static API key.

pub mod client;
pub mod error;
pub mod types;
