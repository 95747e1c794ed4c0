/// Command-line argument parser
pub mod args;
/// Sending a request and demarcating its response.
pub mod client;
/// HTTP data types.
pub mod common;
/// Error type shared by the whole client.
pub mod error;
/// Printing or saving the final output.
pub mod output;

/// Utility components.
pub mod util;

pub use error::{Error, Result};
