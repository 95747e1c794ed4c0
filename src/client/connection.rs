use std::io::{BufRead, ErrorKind};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::util::stream;
use crate::util::stream::{BufferedStream, BufStream};

/// Size of connection read buffers.
const READ_BUF_SIZE: usize = 4096;

/// Size of connection write buffers.
const WRITE_BUF_SIZE: usize = 4096;

/// A connection to a server, used for exactly one request and its response.
///
/// The connection owns the socket together with its read and write buffers. Receiving the
/// response consumes the connection, so everything is released once the response has been read
/// or reading it has failed.
pub struct Connection<S: BufStream> {
    /// The host the connection was opened to.
    pub host: String,
    stream: S,
}

impl Connection<BufferedStream<TcpStream>> {
    /// Resolves the host and opens a TCP connection to the first address that accepts it.
    /// Blocks without a timeout.
    pub fn open(host: &str, port: u16) -> Result<Self> {
        let addrs = resolve(host, port)?;

        let socket = TcpStream::connect(&addrs[..])
            .map_err(|source| Error::Connect { host: host.to_string(), port, source })?;

        if let Ok(addr) = socket.peer_addr() {
            info!("Connected to {} ({})", host, addr);
        }

        Ok(Connection::new(host, stream::with_capacity(READ_BUF_SIZE, WRITE_BUF_SIZE, socket)))
    }
}

impl<S: BufStream> Connection<S> {
    /// Creates a new connection out of the given host name and stream.
    pub fn new(host: &str, stream: S) -> Connection<S> {
        Connection { host: host.to_string(), stream }
    }

    /// Writes all of the given request bytes and flushes them to the server.
    pub fn send(&mut self, request: &[u8]) -> Result<()> {
        self.stream.write_all(request).map_err(Error::Send)?;
        self.stream.flush().map_err(Error::Send)?;
        debug!("Sent {} bytes to {}", request.len(), self.host);
        Ok(())
    }

    /// Reads lines until the server closes the connection. Lines are returned without their
    /// terminators, whether those were "\r\n" or "\n". Nothing in the lines is interpreted.
    ///
    /// If reading fails, the lines read so far are discarded and only the error is returned.
    pub fn receive(mut self) -> Result<Vec<String>> {
        let mut lines = vec![];
        while let Some(line) = read_line(&mut self.stream).map_err(Error::Receive)? {
            lines.push(line);
        }
        debug!("Received {} lines from {}", lines.len(), self.host);
        Ok(lines)
    }
}

/// Resolves the host name to the addresses to try connecting to.
pub fn resolve(host: &str, port: u16) -> Result<Vec<SocketAddr>> {
    let to_error = |source| Error::Resolve { host: host.to_string(), source };

    let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs().map_err(to_error)?.collect();
    if addrs.is_empty() {
        return Err(to_error(std::io::Error::new(ErrorKind::NotFound, "no addresses found")));
    }

    debug!("Resolved {} to {:?}", host, addrs);
    Ok(addrs)
}

/// Reads one line and strips its "\n" or "\r\n" terminator. A last line without a terminator is
/// still returned. Bytes that are not valid UTF-8 are replaced. Returns None at EOF.
fn read_line(reader: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = vec![];
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}
