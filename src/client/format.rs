use std::io::Write;

use crate::common::header::{CONTENT_LENGTH, HeaderListOps};
use crate::common::method::Method;
use crate::common::request::Request;
use crate::common::version::HTTP_VERSION_1_0;

/// Formats the request as the exact bytes to send on the wire.
///
/// # Panics
///
/// Panics if a GET request carries a body or a POST request is missing one.
pub fn format_request(request: &Request) -> Vec<u8> {
    let mut bytes = vec![];
    // writing to a Vec never fails
    write_request(&mut bytes, request).unwrap_or_default();
    bytes
}

/// Writes the request as bytes to the given writer. Does not flush.
///
/// A `Content-Length` header is added after the given headers when the request has a body and
/// no header of that name (in any casing) is already present. The body is written as is, with
/// nothing after it.
///
/// # Panics
///
/// Panics if a GET request carries a body or a POST request is missing one.
pub fn write_request(writer: &mut impl Write, request: &Request) -> std::io::Result<()> {
    assert_eq!(
        request.method.requires_body(),
        request.body.is_some(),
        "{} request with body {:?}", request.method, request.body
    );

    write!(writer, "{} {} {}\r\n", request.method, request.uri, HTTP_VERSION_1_0)?;
    for header in &request.headers {
        write!(writer, "{}\r\n", header)?;
    }
    if let Some(body) = &request.body {
        if !request.headers.contains_header(&CONTENT_LENGTH) {
            write!(writer, "{}:{}\r\n", CONTENT_LENGTH, body.len())?;
        }
    }
    writer.write_all(b"\r\n")?;

    if let (Method::POST, Some(body)) = (request.method, &request.body) {
        writer.write_all(body.as_bytes())?;
    }
    Ok(())
}
