use super::{DelimitedReader, Error, Result};
use std::fmt;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
    Other(String),
}

impl ObjectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
            Self::Other(kind) => kind.as_str(),
        }
    }
}

impl From<&str> for ObjectKind {
    fn from(value: &str) -> Self {
        match value {
            "blob" => Self::Blob,
            "tree" => Self::Tree,
            "commit" => Self::Commit,
            other => Self::Other(other.into()),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The `"<type> <length>\0"` prefix of every loose object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
    pub kind: ObjectKind,
    pub len: usize,
}

impl ObjectHeader {
    pub fn new(kind: ObjectKind, len: usize) -> Self {
        Self { kind, len }
    }

    pub fn decode<R: Read>(reader: &mut DelimitedReader<R>) -> Result<Self> {
        let mut bytes = reader.read_until(b'\0', true)?;
        bytes.pop();

        let text = String::from_utf8_lossy(&bytes);
        let fields: Vec<&str> = text.split(' ').collect();
        let [kind, len] = fields[..] else {
            return Err(Error::InvalidHeader(text.into_owned()));
        };

        Ok(Self::new(kind.into(), len.parse::<usize>()?))
    }
}

impl fmt::Display for ObjectHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, len: {}", self.kind, self.len)
    }
}
