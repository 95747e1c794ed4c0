/// A response split at its first blank line.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SplitResponse {
    /// The status line and headers, each terminated by '\n'.
    pub headers: String,
    /// The entity body, each line terminated by '\n'.
    pub body: String,
}

impl SplitResponse {
    /// Gets the text to show the user. Verbose output keeps the headers in front of the body.
    pub fn output(&self, verbose: bool) -> String {
        if verbose {
            format!("{}{}", self.headers, self.body)
        } else {
            self.body.clone()
        }
    }
}
