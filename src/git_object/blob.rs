use super::{DelimitedReader, Result};
use bytes::Bytes;
use std::fmt;
use std::io::{self, Read, Write};

/// Upper bound on how much blob content gets rendered.
pub const TRUNCATED_SIZE: usize = 3072;

const TRUNCATED_NOTICE: &str = "\n\n(... truncated to 3KB)\n";

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    content: Bytes,
    len: usize,
}

impl Blob {
    /// Reads at most [`TRUNCATED_SIZE`] bytes of a body declared as `len`
    /// bytes. Whatever lies past the cap is left in the stream.
    pub fn decode<R: Read>(reader: &mut DelimitedReader<R>, len: usize) -> Result<Self> {
        let content = reader.read_exact(len.min(TRUNCATED_SIZE))?;
        Ok(Self { content, len })
    }

    pub fn is_truncated(&self) -> bool {
        self.len > TRUNCATED_SIZE
    }

    pub fn content(&self) -> &[u8] {
        self.content.as_ref()
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.content)?;
        if self.is_truncated() {
            w.write_all(TRUNCATED_NOTICE.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.content))?;
        if self.is_truncated() {
            write!(f, "{TRUNCATED_NOTICE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::Cursor;

    fn reader(bytes: Vec<u8>) -> DelimitedReader<Cursor<Vec<u8>>> {
        DelimitedReader::new(Cursor::new(bytes))
    }

    #[test]
    fn it_implements_to_string() {
        let blob = Blob::decode(&mut reader(b"hello".to_vec()), 5).unwrap();
        assert_eq!(blob.to_string(), "hello");
        assert!(!blob.is_truncated());
    }

    #[test]
    fn it_renders_whole_body_up_to_cap() {
        let body = vec![b'a'; TRUNCATED_SIZE];
        let blob = Blob::decode(&mut reader(body.clone()), TRUNCATED_SIZE).unwrap();

        let mut out = vec![];
        blob.write_to(&mut out).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn it_truncates_large_body() {
        let body: Vec<u8> = (0..4000).map(|i| b'a' + (i % 26) as u8).collect();
        let mut reader = reader(body.clone());
        let blob = Blob::decode(&mut reader, 4000).unwrap();

        assert!(blob.is_truncated());
        assert_eq!(blob.content(), &body[..TRUNCATED_SIZE]);

        let mut out = vec![];
        blob.write_to(&mut out).unwrap();
        assert_eq!(out.len(), TRUNCATED_SIZE + TRUNCATED_NOTICE.len());
        assert!(out.ends_with(b"(... truncated to 3KB)\n"));

        // the remaining 928 bytes are never consumed
        assert_eq!(reader.read_exact(928).unwrap().as_ref(), &body[TRUNCATED_SIZE..]);
    }

    #[test]
    fn it_passes_non_utf8_bytes_through() {
        let body = vec![0xff, 0xfe, b'\n', 0x00];
        let blob = Blob::decode(&mut reader(body.clone()), 4).unwrap();

        let mut out = vec![];
        blob.write_to(&mut out).unwrap();
        assert_eq!(out, body);
    }

    #[test]
    fn it_fails_on_short_body() {
        assert!(matches!(
            Blob::decode(&mut reader(b"hel".to_vec()), 5),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
