use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a request from completing. None of these are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The host name could not be resolved to any address.
    #[error("could not resolve host {host}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// No connection could be opened to any address of the host.
    #[error("could not connect to {host}:{port}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// Writing or flushing the request failed.
    #[error("error sending request")]
    Send(#[source] std::io::Error),

    /// Reading the response failed before the server closed the connection.
    #[error("error receiving response")]
    Receive(#[source] std::io::Error),

    /// The URL given on the command line can not be used.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The file holding the request body could not be read.
    #[error("could not read body file {}", path.display())]
    BodyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output could not be written.
    #[error("could not write output to {destination}")]
    Output {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}
