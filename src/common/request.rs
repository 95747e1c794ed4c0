use std::path::PathBuf;

use crate::common::header::HeaderList;
use crate::common::method::Method;

/// An HTTP request, fully validated and ready to be formatted.
///
/// A GET request never has a body and a POST request always has one. The command line layer
/// upholds this; the formatter panics if it does not hold.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    /// The method.
    pub method: Method,
    /// The server name, without scheme or port.
    pub host: String,
    /// The path and query. Always starts with '/'.
    pub uri: String,
    /// The raw `name:value` headers, in the order they were given.
    pub headers: HeaderList,
    /// The body.
    pub body: Option<String>,
    /// Whether the response headers are kept in the output.
    pub verbose: bool,
    /// The file to save the output to. The output is printed when this is None.
    pub output: Option<PathBuf>,
}

impl Request {
    /// Creates a GET request for the given host and uri with no headers.
    pub fn get(host: impl Into<String>, uri: impl Into<String>) -> Request {
        Request {
            method: Method::GET,
            host: host.into(),
            uri: uri.into(),
            headers: vec![],
            body: None,
            verbose: false,
            output: None,
        }
    }

    /// Creates a POST request for the given host and uri carrying the given body.
    pub fn post(host: impl Into<String>, uri: impl Into<String>, body: impl Into<String>) -> Request {
        Request {
            method: Method::POST,
            body: Some(body.into()),
            ..Request::get(host, uri)
        }
    }
}
