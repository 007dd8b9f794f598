use super::{DelimitedReader, Error, Result};
use bytes::Bytes;
use std::fmt;
use std::io::{self, Read, Write};

/// A commit body kept exactly as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit(Bytes);

impl Commit {
    pub fn decode<R: Read>(reader: &mut DelimitedReader<R>, len: usize) -> Result<Self> {
        Ok(Self(reader.read_exact(len)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.0)
    }

    /// Extracts the well-known header lines and the message.
    ///
    /// Header lines stop at the first empty line. Lines other than
    /// `tree`, `parent`, `author` and `committer` are skipped together with
    /// their space-prefixed continuation lines (e.g. `gpgsig`).
    pub fn fields(&self) -> Result<CommitFields> {
        let text = String::from_utf8_lossy(&self.0);
        let (head, message) = match text.split_once("\n\n") {
            Some((head, message)) => (head, message),
            None => (text.trim_end_matches('\n'), ""),
        };

        let mut tree = None;
        let mut parents = vec![];
        let mut author = None;
        let mut committer = None;

        for line in head.lines().filter(|line| !line.starts_with(' ')) {
            match line.split_once(' ') {
                Some(("tree", value)) => tree = Some(value.to_string()),
                Some(("parent", value)) => parents.push(value.to_string()),
                Some(("author", value)) => author = Some(value.to_string()),
                Some(("committer", value)) => committer = Some(value.to_string()),
                _ => {}
            }
        }

        let tree = tree.ok_or(Error::from("commit has no tree line"))?;

        Ok(CommitFields {
            tree,
            parents,
            author,
            committer,
            message: message.to_string(),
        })
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitFields {
    pub tree: String,
    pub parents: Vec<String>,
    pub author: Option<String>,
    pub committer: Option<String>,
    pub message: String,
}

impl fmt::Display for CommitFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tree: {}", self.tree)?;
        for parent in self.parents.iter() {
            writeln!(f, "parent: {parent}")?;
        }
        if let Some(ref author) = self.author {
            writeln!(f, "author: {author}")?;
        }
        if let Some(ref committer) = self.committer {
            writeln!(f, "committer: {committer}")?;
        }
        write!(f, "message: {}", self.message)
    }
}
