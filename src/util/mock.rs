use std::cell::RefCell;
use std::cmp::min;
use std::io::{Error, ErrorKind, Read, Write};
use std::ops::DerefMut;
use std::rc::Rc;

/// A reader that hands out the given chunks one read at a time.
/// Once the chunks run out it reports EOF, or the configured error if one is set.
pub struct MockReader {
    pub error_when_empty: Option<ErrorKind>,
    pub data: Vec<Vec<u8>>,
}

impl MockReader {
    pub fn from_strs(data: Vec<&str>) -> MockReader {
        MockReader { data: data.into_iter().map(|s| s.as_bytes().to_vec()).collect(), error_when_empty: None }
    }

    pub fn from_bytes(data: Vec<&[u8]>) -> MockReader {
        MockReader { data: data.into_iter().map(|s| s.to_vec()).collect(), error_when_empty: None }
    }

    /// Creates a reader that fails with the given error after the chunks are read.
    pub fn failing_after(data: Vec<&str>, kind: ErrorKind) -> MockReader {
        MockReader { error_when_empty: Some(kind), ..MockReader::from_strs(data) }
    }
}

impl Read for MockReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let next = match self.data.first_mut() {
            Some(next) => next,
            None => return match self.error_when_empty {
                Some(kind) => Err(Error::from(kind)),
                None => Ok(0)
            }
        };

        let amount = min(buf.len(), next.len());
        buf[..amount].copy_from_slice(&next[..amount]);
        next.drain(0..amount);

        if next.is_empty() {
            self.data.remove(0);
        }

        Ok(amount)
    }
}

/// A writer that records every write, and moves the recorded writes to `flushed` on flush.
pub struct MockWriter {
    pub written: Rc<RefCell<Vec<Vec<u8>>>>,
    pub flushed: Rc<RefCell<Vec<Vec<u8>>>>,
    pub fail_writes: bool,
}

impl MockWriter {
    pub fn new() -> MockWriter {
        MockWriter { written: Rc::new(RefCell::new(vec![])), flushed: Rc::new(RefCell::new(vec![])), fail_writes: false }
    }

    /// Creates a writer whose writes always fail with a broken pipe.
    pub fn broken() -> MockWriter {
        MockWriter { fail_writes: true, ..MockWriter::new() }
    }
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.fail_writes {
            return Err(Error::from(ErrorKind::BrokenPipe));
        }
        self.written.borrow_mut().push(Vec::from(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flushed.borrow_mut().append(self.written.borrow_mut().deref_mut());
        Ok(())
    }
}

/// A stream made out of a separate reader and writer.
pub struct MockStream<R, W> {
    pub reader: R,
    pub writer: W,
}

impl<R, W> MockStream<R, W> {
    pub fn new(reader: R, writer: W) -> MockStream<R, W> {
        MockStream { reader, writer }
    }
}

impl<R: Read, W> Read for MockStream<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl<R, W: Write> Write for MockStream<R, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{ErrorKind, Read};

    use crate::util::mock::MockReader;

    fn test_read(reader: &mut impl Read, expected: &str, buf_size: usize) {
        let mut buf = vec![0u8; buf_size];
        let len = reader.read(&mut buf).unwrap();
        assert_eq!(expected, String::from_utf8_lossy(&buf[..len]));
    }

    #[test]
    fn mock_reader_hands_out_chunks() {
        let mut reader = MockReader::from_strs(vec!["hello", "world"]);

        test_read(&mut reader, "hel", 3);
        test_read(&mut reader, "lo", 10);
        test_read(&mut reader, "world", 10);
        test_read(&mut reader, "", 10);
    }

    #[test]
    fn mock_reader_fails_when_empty() {
        let mut reader = MockReader::failing_after(vec!["hi"], ErrorKind::ConnectionReset);

        test_read(&mut reader, "hi", 10);
        let err = reader.read(&mut [0u8; 4]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionReset);
    }
}
