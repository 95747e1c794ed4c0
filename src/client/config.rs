/// The port HTTP servers listen on. Requests are always sent here outside of tests.
pub const HTTP_PORT: u16 = 80;

/// The config for sending requests.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Config {
    /// The port to connect to on the request's host.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config { port: HTTP_PORT }
    }
}
