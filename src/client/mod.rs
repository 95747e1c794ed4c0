pub use client::*;
pub use config::*;

/// Entry point for sending a request.
mod client;
/// Config for sending requests.
mod config;
/// Connection owning the socket for one request and response.
pub mod connection;
/// Formats requests as HTTP/1.0 bytes.
pub mod format;
/// Splits responses into headers and body.
pub mod split;
