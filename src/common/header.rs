use std::fmt::{Display, Formatter};

use crate::common::header::Header::{Custom, Standard};

/// A header name. Is either a "Standard" header with a static canonical name, or a "Custom" header
/// with a uniquely allocated, lower-cased name.
/// Names compare case-insensitively because both variants are built through `Header::from`.
#[derive(PartialEq, Eq, Hash, Debug, Clone)]
pub enum Header {
    Standard(&'static str),
    Custom(String),
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Standard(s) => f.write_str(s),
            Custom(s) => f.write_str(s)
        }
    }
}

macro_rules! standard_headers {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $lower:expr, $canonical:expr);
        )+
    ) => {
        $(
            $(#[$docs])*
            pub const $name: Header = Header::Standard($canonical);
        )+

        impl From<String> for Header {
            /// Gets a header from the given string representing the header name. Surrounding
            /// whitespace is ignored.
            fn from(value: String) -> Header {
                let mut value = value.trim().to_string();
                value.make_ascii_lowercase();
                match value.as_str() {
                    $(
                    $lower => $name,
                    )+
                    _ => Header::Custom(value)
                }
            }
        }
    }
}

impl From<&str> for Header {
    /// Gets a header from the given string representing the header name.
    fn from(value: &str) -> Header {
        Header::from(value.to_string())
    }
}

standard_headers! {
    (CONTENT_LENGTH, "content-length", "Content-Length");
    (CONTENT_TYPE, "content-type", "Content-Type");
}

/// Creates an ordered list of raw `name:value` headers.
/// ```
/// use httpc::common::header::{CONTENT_TYPE, HeaderListOps, Header};
/// use httpc::header_list;
///
/// let headers = header_list![
///    (CONTENT_TYPE, "application/json"),
///    ("X-Custom", "hello"),
/// ];
///
/// assert_eq!(headers, vec!["Content-Type:application/json", "X-Custom:hello"]);
/// assert!(headers.contains_header(&Header::from("x-custom")));
/// ```
#[macro_export]
macro_rules! header_list {
    () => { $crate::common::header::HeaderList::new() };
    ($(($header:expr, $value:expr)),+ $(,)?) => {
        vec![$(format!("{}:{}", $header, $value),)+]
    }
}

/// An ordered list of raw headers in `name:value` form. Duplicates are allowed.
pub type HeaderList = Vec<String>;

/// Operations for a header list.
pub trait HeaderListOps {
    /// Checks if any header in the list has the given name.
    fn contains_header(&self, k: &Header) -> bool;
}

impl HeaderListOps for HeaderList {
    fn contains_header(&self, k: &Header) -> bool {
        self.iter().any(|raw| header_name(raw) == *k)
    }
}

/// Gets the name of a raw header: everything before the first ':'.
/// A raw header with no ':' is all name.
pub fn header_name(raw: &str) -> Header {
    Header::from(raw.split(':').next().unwrap_or(raw))
}
