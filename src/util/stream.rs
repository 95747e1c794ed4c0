use std::io::{BufRead, BufReader, BufWriter, Read, Result, Write};

/// A stream that can be read and written.
pub trait Stream: Read + Write {}

impl<T: Read + Write> Stream for T {}

/// A stream that supports buffered reading operations.
pub trait BufStream: BufRead + Write {}

impl<T: BufRead + Write> BufStream for T {}

/// A stream wrapped with a read buffer and a write buffer.
/// The stream and both buffers are owned together, so dropping this releases all of them.
/// Written data is held until the write buffer fills up or `flush` is called.
pub type BufferedStream<S> = ReadableWriter<BufWriter<WriteableReader<BufReader<S>>>>;

/// Creates a new buffered stream with the given read and write buffer capacities.
pub fn with_capacity<S: Stream>(read_capacity: usize, write_capacity: usize, inner: S) -> BufferedStream<S> {
    ReadableWriter(BufWriter::with_capacity(
        write_capacity,
        WriteableReader(BufReader::with_capacity(read_capacity, inner)),
    ))
}

/// Wrapper with some inner value that can be mutably referenced.
pub trait InnerMut {
    type Inner;

    /// Gets a mutable reference to the inner value.
    fn inner_mut(&mut self) -> &mut Self::Inner;
}

/// A writer that contains a readable inner. Reads skip the writer's buffer.
pub struct ReadableWriter<T>(T);

/// A reader that contains a writable inner. Writes skip the reader's buffer.
pub struct WriteableReader<T>(T);

impl<R: Read, T: InnerMut<Inner=R>> Read for ReadableWriter<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.0.inner_mut().read(buf)
    }
}

impl<T: Write> Write for ReadableWriter<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.0.flush()
    }
}

impl<T: InnerMut> BufRead for ReadableWriter<T> where T::Inner: BufRead {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        self.0.inner_mut().fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.0.inner_mut().consume(amt)
    }
}

impl<T: Read> Read for WriteableReader<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.0.read(buf)
    }
}

impl<W: Write, T: InnerMut<Inner=W>> Write for WriteableReader<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.0.inner_mut().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.0.inner_mut().flush()
    }
}

impl<T: BufRead> BufRead for WriteableReader<T> {
    fn fill_buf(&mut self) -> Result<&[u8]> {
        self.0.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.0.consume(amt)
    }
}

impl<R> InnerMut for BufReader<R> {
    type Inner = R;

    fn inner_mut(&mut self) -> &mut Self::Inner {
        self.get_mut()
    }
}

impl<W: Write> InnerMut for BufWriter<W> {
    type Inner = W;

    fn inner_mut(&mut self) -> &mut Self::Inner {
        self.get_mut()
    }
}
