use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use log::{LevelFilter, warn};
use regex::Regex;
use url::{Host, Url};

use crate::client::HTTP_PORT;
use crate::common::header::HeaderList;
use crate::common::method::Method;
use crate::common::request::Request;
use crate::error::{Error, Result};

/// Pattern for a header given on the command line: a token name, a ':', then a value.
const HEADER_PATTERN: &str = r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+:.+$";

/// httpc is a curl-like application but supports HTTP protocol only.
#[derive(Parser, Debug)]
#[command(name = "httpc", version, about, arg_required_else_help = true)]
pub struct Args {
    /// (Optional) Level of the log messages written to stderr.
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
    #[command(subcommand)]
    pub command: Command,
}

/// The request to send.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Executes a HTTP GET request for a given URL and prints the response.
    #[command(disable_help_flag = true)]
    Get(RequestArgs),
    /// Executes a HTTP POST request for a given URL with inline data or from file and prints the response.
    #[command(disable_help_flag = true)]
    Post(PostArgs),
}

/// Arguments shared by every request. The help flag is long only, as -h adds a header.
#[derive(clap::Args, Debug)]
pub struct RequestArgs {
    /// Prints the detail of the response such as protocol, status, and headers.
    #[arg(short, long)]
    pub verbose: bool,
    /// Associates a header to the request. May be given many times.
    #[arg(short = 'h', long = "header", value_name = "key:value", value_parser = parse_header)]
    pub headers: Vec<String>,
    /// Outputs the response contents into the given file. ".txt" is added if missing.
    #[arg(short, long, value_name = "file")]
    pub output: Option<PathBuf>,
    /// The http:// URL to send the request to.
    pub url: String,
    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Arguments of a POST request. Exactly one of the inline data or the file is required.
#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("body").required(true).args(["data", "file"])))]
pub struct PostArgs {
    #[command(flatten)]
    pub request: RequestArgs,
    /// Associates inline data to the body of the request.
    #[arg(short, long, value_name = "inline-data")]
    pub data: Option<String>,
    /// Associates the content of a file to the body of the request.
    #[arg(short, long, value_name = "file")]
    pub file: Option<PathBuf>,
}

impl Args {
    /// Builds the request described by the arguments. Reads the body file if one was given.
    pub fn into_request(self) -> Result<Request> {
        match self.command {
            Command::Get(args) => args.into_request(Method::GET, None),
            Command::Post(args) => {
                let body = match (args.data, args.file) {
                    (Some(data), _) => data,
                    (None, Some(path)) => read_body_file(&path)?,
                    // clap requires one of the two
                    (None, None) => String::new(),
                };
                args.request.into_request(Method::POST, Some(body))
            }
        }
    }
}

impl RequestArgs {
    fn into_request(self, method: Method, body: Option<String>) -> Result<Request> {
        let (host, uri) = parse_target(&self.url)?;
        let headers: HeaderList = self.headers;

        Ok(Request { method, host, uri, headers, body, verbose: self.verbose, output: self.output })
    }
}

/// Gets the header pattern, compiling it on first use.
fn header_regex() -> std::result::Result<&'static Regex, String> {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    if let Some(regex) = HEADER_REGEX.get() {
        return Ok(regex);
    }
    let regex = Regex::new(HEADER_PATTERN).map_err(|err| err.to_string())?;
    Ok(HEADER_REGEX.get_or_init(|| regex))
}

/// Checks that the given header has the form `key:value`.
fn parse_header(raw: &str) -> std::result::Result<String, String> {
    if header_regex()?.is_match(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("header '{}' is not of the form key:value", raw))
    }
}

/// Splits an http URL into the host to connect to and the path and query to request.
/// The path is "/" when the URL has none. A port in the URL is ignored.
pub fn parse_target(raw: &str) -> Result<(String, String)> {
    let invalid = |reason: String| Error::InvalidUrl { url: raw.to_string(), reason };

    let url = Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if url.scheme() != "http" {
        return Err(invalid(format!("scheme '{}' is not supported, use http://", url.scheme())));
    }

    let host = match url.host() {
        Some(Host::Ipv6(addr)) => addr.to_string(),
        Some(host) => host.to_string(),
        None => return Err(invalid(String::from("missing host"))),
    };

    if let Some(port) = url.port() {
        warn!("Ignoring port {} in {}, requests are sent to port {}", port, raw, HTTP_PORT);
    }

    let mut uri = String::from(url.path());
    if uri.is_empty() {
        uri.push('/');
    }
    if let Some(query) = url.query() {
        uri.push('?');
        uri.push_str(query);
    }

    Ok((host, uri))
}

/// Reads the body file, ending every line with '\n'.
fn read_body_file(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)
        .map_err(|source| Error::BodyFile { path: path.to_path_buf(), source })?;

    Ok(contents.lines().map(|line| format!("{}\n", line)).collect())
}
