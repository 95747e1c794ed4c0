/// HTTP version "HTTP/1.0". The only version this client speaks.
pub const HTTP_VERSION_1_0: &str = "HTTP/1.0";
