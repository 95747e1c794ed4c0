use std::fmt::{Display, Formatter};

/// An HTTP method supported by the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET method. Never carries a body.
    GET,
    /// POST method. Always carries a body.
    POST,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Method {
    /// Whether requests with this method must carry an entity body.
    pub fn requires_body(&self) -> bool {
        matches!(self, Method::POST)
    }
}
