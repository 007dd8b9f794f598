use super::{DelimitedReader, Error, ObjectHash, Result, SHA1_HASH_SIZE};
use bytes::Bytes;
use std::fmt;
use std::io::{self, Read, Write};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    mode: String,
    name: Bytes,
    hash: ObjectHash,
}

impl TreeEntry {
    pub fn new(mode: impl Into<String>, name: impl Into<Bytes>, hash: ObjectHash) -> Self {
        Self {
            mode: mode.into(),
            name: name.into(),
            hash,
        }
    }

    pub fn mode(&self) -> &str {
        self.mode.as_str()
    }

    /// File name bytes exactly as stored; not necessarily UTF-8.
    pub fn name(&self) -> &[u8] {
        self.name.as_ref()
    }

    pub fn hash(&self) -> ObjectHash {
        self.hash
    }

    /// Decodes one `"<mode> <name>\0" + <20 raw bytes>` record, or returns
    /// `None` when the stream ends cleanly where a new record would start.
    fn decode<R: Read>(reader: &mut DelimitedReader<R>) -> Result<Option<Self>> {
        let mut bytes = reader.read_until(b'\0', false)?;
        if bytes.is_empty() {
            return Ok(None);
        }

        if bytes.last() != Some(&b'\0') {
            return Err(Error::InvalidTreeEntry(format!(
                "unexpected end of entry {}",
                String::from_utf8_lossy(&bytes)
            )));
        }
        bytes.pop();

        let fields: Vec<&[u8]> = bytes.split(|&b| b == b' ').collect();
        let [mode, name] = fields[..] else {
            return Err(Error::InvalidTreeEntry(format!(
                "expected \"<mode> <name>\", got {}",
                String::from_utf8_lossy(&bytes)
            )));
        };

        let mode = String::from_utf8_lossy(mode).into_owned();
        let name = Bytes::copy_from_slice(name);
        let hash = ObjectHash::try_from(reader.read_exact(SHA1_HASH_SIZE)?.as_ref())?;
        Ok(Some(Self::new(mode, name, hash)))
    }

    /// Writes the entry line with the name bytes passed through untouched.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "fileMode: {}, filename: ", self.mode)?;
        w.write_all(&self.name)?;
        writeln!(w, ", SHA: {}", self.hash.hex())
    }
}

impl fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fileMode: {}, filename: {}, SHA: {}",
            self.mode,
            String::from_utf8_lossy(&self.name),
            self.hash.hex()
        )
    }
}

/// Decodes tree records until the stream is exhausted. The declared length
/// plays no part here.
pub fn decode_entries<R: Read>(reader: &mut DelimitedReader<R>) -> Result<Vec<TreeEntry>> {
    let mut entries = vec![];

    while let Some(entry) = TreeEntry::decode(reader)? {
        trace!(
            mode = entry.mode(),
            name = %String::from_utf8_lossy(entry.name()),
            "tree entry"
        );
        entries.push(entry);
    }

    Ok(entries)
}
