use log::{debug, info};

use crate::client::config::Config;
use crate::client::connection::Connection;
use crate::client::format::format_request;
use crate::client::split::split;
use crate::common::request::Request;
use crate::error::Result;

/// Sends the request to its host on the HTTP port and gets the text to show the user.
/// This function blocks until the server closes the connection.
pub fn execute(request: &Request) -> Result<String> {
    execute_with(&Config::default(), request)
}

/// Sends the request using the given config and gets the text to show the user: the whole
/// response when the request is verbose, otherwise only the body.
pub fn execute_with(config: &Config, request: &Request) -> Result<String> {
    let bytes = format_request(request);
    debug!("Request:\n{}", String::from_utf8_lossy(&bytes));

    info!("Connecting to {}:{}", request.host, config.port);
    let mut connection = Connection::open(&request.host, config.port)?;
    connection.send(&bytes)?;
    let lines = connection.receive()?;

    Ok(split(&lines, request.verbose))
}
