/// HTTP header data types and functions.
pub mod header;
/// HTTP method data type and functions.
pub mod method;
/// HTTP request data type.
pub mod request;
/// Split HTTP response data type.
pub mod response;
/// HTTP version constants.
pub mod version;
