//! Input sources the lexer pulls chunks from.

use std::io::{self, Read, Seek, SeekFrom};

use text_size::TextSize;

/// Pull-based byte source with random seek.
///
/// `read` replaces the contents of `chunk` with the next bytes of the
/// stream; leaving it empty signals end of stream. `seek` moves the stream
/// so the next `read` starts at `position`.
pub trait Input {
    fn read(&mut self, chunk: &mut Vec<u8>) -> io::Result<()>;
    fn seek(&mut self, position: TextSize) -> io::Result<()>;
}

impl<I: Input + ?Sized> Input for &mut I {
    fn read(&mut self, chunk: &mut Vec<u8>) -> io::Result<()> {
        (**self).read(chunk)
    }

    fn seek(&mut self, position: TextSize) -> io::Result<()> {
        (**self).seek(position)
    }
}

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// In-memory input over a byte slice.
#[derive(Debug, Clone)]
pub struct StrInput<'a> {
    bytes: &'a [u8],
    position: usize,
    chunk_size: usize,
}

impl<'a> StrInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Limits how many bytes each `read` hands out. Zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}

impl Input for StrInput<'_> {
    fn read(&mut self, chunk: &mut Vec<u8>) -> io::Result<()> {
        let end = (self.position + self.chunk_size).min(self.bytes.len());
        chunk.clear();
        chunk.extend_from_slice(&self.bytes[self.position.min(end)..end]);
        self.position = end;
        Ok(())
    }

    fn seek(&mut self, position: TextSize) -> io::Result<()> {
        self.position = usize::from(position).min(self.bytes.len());
        Ok(())
    }
}

/// Input over any `Read + Seek` stream, such as a file.
#[derive(Debug)]
pub struct ReadInput<R> {
    inner: R,
    chunk_size: usize,
}

impl<R: Read + Seek> ReadInput<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> Input for ReadInput<R> {
    fn read(&mut self, chunk: &mut Vec<u8>) -> io::Result<()> {
        chunk.clear();
        chunk.resize(self.chunk_size, 0);
        let read = loop {
            match self.inner.read(chunk) {
                Ok(read) => break read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    chunk.clear();
                    return Err(err);
                }
            }
        };
        chunk.truncate(read);
        Ok(())
    }

    fn seek(&mut self, position: TextSize) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(u64::from(u32::from(position))))?;
        Ok(())
    }
}
