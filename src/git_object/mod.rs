mod blob;
mod commit;
mod header;
mod tree;

use super::{DelimitedReader, Error, ObjectHash, Result, SHA1_HASH_SIZE};
pub use blob::{Blob, TRUNCATED_SIZE};
pub use commit::{Commit, CommitFields};
pub use header::{ObjectHeader, ObjectKind};
use std::io::{self, Read, Write};
use tracing::debug;
pub use tree::TreeEntry;

const UNSUPPORTED_NOTICE: &str = "Parsing this tag-type not yet supported\n";

#[derive(Debug, Clone, PartialEq)]
pub enum GitObject {
    Blob(Blob),
    Tree(Vec<TreeEntry>),
    Commit(Commit),
    Unsupported(String),
}

impl GitObject {
    /// Decodes the header and then the body it announces.
    pub fn decode<R: Read>(reader: &mut DelimitedReader<R>) -> Result<(ObjectHeader, Self)> {
        let header = ObjectHeader::decode(reader)?;
        let obj = Self::decode_body(&header, reader)?;
        Ok((header, obj))
    }

    /// Decodes the body that follows an already decoded `header`.
    pub fn decode_body<R: Read>(
        header: &ObjectHeader,
        reader: &mut DelimitedReader<R>,
    ) -> Result<Self> {
        let obj = match header.kind {
            ObjectKind::Blob => Self::Blob(Blob::decode(reader, header.len)?),
            ObjectKind::Tree => {
                let entries = tree::decode_entries(reader)?;
                debug!(entries = entries.len(), "decoded tree");
                Self::Tree(entries)
            }
            ObjectKind::Commit => Self::Commit(Commit::decode(reader, header.len)?),
            ObjectKind::Other(ref kind) => {
                debug!(kind = kind.as_str(), "skipping body of unsupported object");
                Self::Unsupported(kind.clone())
            }
        };
        Ok(obj)
    }

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Self::Blob(blob) => blob.write_to(w),
            Self::Tree(entries) => {
                for entry in entries {
                    entry.write_to(w)?;
                }
                Ok(())
            }
            Self::Commit(commit) => commit.write_to(w),
            Self::Unsupported(_) => w.write_all(UNSUPPORTED_NOTICE.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn decode(bytes: &[u8]) -> Result<(ObjectHeader, GitObject)> {
        let mut reader = DelimitedReader::new(Cursor::new(bytes.to_vec()));
        GitObject::decode(&mut reader)
    }

    fn render(obj: &GitObject) -> Vec<u8> {
        let mut out = vec![];
        obj.write_to(&mut out).unwrap();
        out
    }

    #[test]
    fn it_creates_blob_git_object() {
        let (header, obj) = decode(b"blob 5\0hello").unwrap();
        assert_eq!(header, ObjectHeader::new(ObjectKind::Blob, 5));
        assert_eq!(render(&obj), b"hello");
    }

    #[test]
    fn it_creates_empty_tree_git_object() {
        let (header, obj) = decode(b"tree 0\0").unwrap();
        assert_eq!(header, ObjectHeader::new(ObjectKind::Tree, 0));
        assert_eq!(obj, GitObject::Tree(vec![]));
        assert!(render(&obj).is_empty());
    }

    #[test]
    fn it_renders_tree_entries_line_by_line() {
        let bytes = [
            &b"tree 66\0"[..],
            &b"100644 a.txt\0"[..],
            &[0u8; 20][..],
            &b"40000 src\0"[..],
            &[0xffu8; 20][..],
        ]
        .concat();
        let (_, obj) = decode(&bytes).unwrap();
        assert_eq!(
            String::from_utf8(render(&obj)).unwrap(),
            "fileMode: 100644, filename: a.txt, SHA: 0000000000000000000000000000000000000000\n\
             fileMode: 40000, filename: src, SHA: ffffffffffffffffffffffffffffffffffffffff\n"
        );
    }

    #[test]
    fn it_creates_commit_git_object() {
        let body = "tree 9bedf67800b2923982bdf60c89c57ce6ce2d9a1c\n\ninitial\n";
        let bytes = format!("commit {}\0{body}", body.len());
        let (_, obj) = decode(bytes.as_bytes()).unwrap();
        assert_eq!(render(&obj), body.as_bytes());
    }

    #[test]
    fn it_does_not_decode_unsupported_kinds() {
        let mut reader = DelimitedReader::new(Cursor::new(b"tag 3\0abc".to_vec()));
        let (header, obj) = GitObject::decode(&mut reader).unwrap();

        assert_eq!(header.kind, ObjectKind::Other("tag".into()));
        assert_eq!(obj, GitObject::Unsupported("tag".into()));
        assert_eq!(render(&obj), UNSUPPORTED_NOTICE.as_bytes());
        assert_eq!(reader.read_exact(3).unwrap().as_ref(), b"abc");
    }

    #[test]
    fn it_fails_on_commit_declaring_usize_max_length() {
        assert!(matches!(
            decode(b"commit 18446744073709551615\0tree x\n"),
            Err(Error::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn it_fails_on_truncated_blob() {
        assert!(matches!(
            decode(b"blob 10\0short"),
            Err(Error::UnexpectedEof { .. })
        ));
    }
}
