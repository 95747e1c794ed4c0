use crate::common::response::SplitResponse;

/// Splits response lines into headers and body at the first blank line, one line at a time.
///
/// Lines are collected into one buffer. The first blank line moves everything collected so far
/// into the headers and is itself dropped. Later blank lines belong to the body. A response with
/// no blank line at all is treated as all body.
pub struct ResponseSplitter {
    headers: Option<String>,
    buf: String,
}

impl ResponseSplitter {
    /// Creates a new splitter that has not seen any lines.
    pub fn new() -> ResponseSplitter {
        ResponseSplitter { headers: None, buf: String::new() }
    }

    /// Adds the next line of the response. The line must not include its terminator.
    pub fn push_line(&mut self, line: &str) {
        if self.headers.is_none() && line.trim().is_empty() {
            self.headers = Some(std::mem::take(&mut self.buf));
            return;
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Finishes splitting once the response has no more lines.
    pub fn finish(self) -> SplitResponse {
        SplitResponse {
            headers: self.headers.unwrap_or_default(),
            body: self.buf,
        }
    }
}

impl Default for ResponseSplitter {
    fn default() -> Self {
        ResponseSplitter::new()
    }
}

/// Splits the given response lines and gets the text to show: the headers and body when verbose,
/// otherwise only the body.
pub fn split<S: AsRef<str>>(lines: &[S], verbose: bool) -> String {
    let mut splitter = ResponseSplitter::new();
    for line in lines {
        splitter.push_line(line.as_ref());
    }
    splitter.finish().output(verbose)
}
