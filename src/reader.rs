use super::{Error, Result};
use bytes::Bytes;
use std::io::{BufRead, BufReader, Read};

/// Forward-only reader over a decompressed object stream.
///
/// Reads are buffered, but both primitives stop exactly where a
/// byte-at-a-time reader would, so the stream position after each call is
/// the same.
#[derive(Debug)]
pub struct DelimitedReader<R> {
    inner: BufReader<R>,
}

impl<R: Read> DelimitedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
        }
    }

    /// Reads up to and including `delimiter`.
    ///
    /// When the stream ends first, `must_exist` decides between
    /// [`Error::UnexpectedEof`] and returning the (possibly empty) bytes
    /// accumulated so far.
    pub fn read_until(&mut self, delimiter: u8, must_exist: bool) -> Result<Vec<u8>> {
        let mut buf = vec![];
        self.inner.read_until(delimiter, &mut buf)?;

        if must_exist && buf.last() != Some(&delimiter) {
            return Err(Error::UnexpectedEof {
                expected: buf.len() + 1,
                actual: buf.len(),
            });
        }

        Ok(buf)
    }

    /// Reads exactly `n` bytes. A short stream is always an error.
    ///
    /// `n` usually comes from an object header, so the buffer grows with
    /// what the stream supplies instead of being sized up front.
    pub fn read_exact(&mut self, n: usize) -> Result<Bytes> {
        let mut buf = vec![];
        (&mut self.inner).take(n as u64).read_to_end(&mut buf)?;

        if buf.len() < n {
            return Err(Error::UnexpectedEof {
                expected: n,
                actual: buf.len(),
            });
        }

        Ok(Bytes::from(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    #[test]
    fn it_reads_until_delimiter_inclusive() {
        let mut reader = DelimitedReader::new(Cursor::new(b"blob 5\0hello".to_vec()));
        assert_eq!(reader.read_until(0, true).unwrap(), b"blob 5\0");
        assert_eq!(reader.read_exact(5).unwrap().as_ref(), b"hello");
    }

    #[test]
    fn it_returns_partial_bytes_on_clean_end() {
        let mut reader = DelimitedReader::new(Cursor::new(b"abc".to_vec()));
        assert_eq!(reader.read_until(0, false).unwrap(), b"abc");
        assert!(reader.read_until(0, false).unwrap().is_empty());
    }

    #[test]
    fn it_fails_when_delimiter_must_exist() {
        let mut reader = DelimitedReader::new(Cursor::new(b"abc".to_vec()));
        assert!(matches!(
            reader.read_until(0, true),
            Err(Error::UnexpectedEof {
                expected: 4,
                actual: 3
            })
        ));

        let mut reader = DelimitedReader::new(Cursor::new(vec![]));
        assert!(matches!(
            reader.read_until(0, true),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn it_fails_on_short_exact_read() {
        let mut reader = DelimitedReader::new(Cursor::new(b"hel".to_vec()));
        assert!(matches!(
            reader.read_exact(5),
            Err(Error::UnexpectedEof {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn it_fails_on_huge_length_without_allocating_it() {
        let mut reader = DelimitedReader::new(Cursor::new(b"tree x\n".to_vec()));
        assert!(matches!(
            reader.read_exact(usize::MAX),
            Err(Error::UnexpectedEof {
                expected: usize::MAX,
                actual: 7
            })
        ));
    }

    #[test]
    fn it_reads_zero_bytes() {
        let mut reader = DelimitedReader::new(Cursor::new(vec![]));
        assert!(reader.read_exact(0).unwrap().is_empty());
    }

    #[test]
    fn it_propagates_stream_errors() {
        struct Broken;

        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt deflate stream"))
            }
        }

        let mut reader = DelimitedReader::new(Broken);
        assert!(matches!(reader.read_until(0, false), Err(Error::Io(_))));
        assert!(matches!(reader.read_exact(1), Err(Error::Io(_))));
    }
}
