use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener};
use std::thread::{JoinHandle, spawn};

use httpc::client::Config;

/// A server that accepts one connection, records the request, answers with a canned response and
/// closes the connection.
pub struct TestServer {
    pub port: u16,
    handle: JoinHandle<Vec<u8>>,
}

impl TestServer {
    /// Starts the server on a free local port. The response is written in the given chunks.
    pub fn start(response: &[&str]) -> TestServer {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let response: Vec<String> = response.iter().map(|chunk| chunk.to_string()).collect();

        let handle = spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let request = read_request(&mut BufReader::new(socket.try_clone().unwrap()));

            for chunk in response {
                socket.write_all(chunk.as_bytes()).unwrap();
                socket.flush().unwrap();
            }
            socket.shutdown(Shutdown::Both).unwrap_or_default();
            request
        });

        TestServer { port, handle }
    }

    /// Gets a client config pointing at this server.
    pub fn config(&self) -> Config {
        Config { port: self.port }
    }

    /// Waits for the server to finish and gets the raw request it received.
    pub fn request(self) -> Vec<u8> {
        self.handle.join().unwrap()
    }
}

/// Reads a request head up to the blank line, then as many body bytes as its Content-Length says.
fn read_request(reader: &mut impl BufRead) -> Vec<u8> {
    let mut request = vec![];
    let mut content_length = 0;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 {
            return request;
        }
        request.extend_from_slice(line.as_bytes());

        if line == "\r\n" {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    request.extend(body);
    request
}
