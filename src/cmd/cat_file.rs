use super::{GitObject, ObjectHash, ObjectHeader, Repository, Result};
use std::io::Write;
use tracing::{debug, info};

pub(crate) fn run<W: Write>(
    repo: &Repository,
    hash: &str,
    fields: bool,
    out: &mut W,
) -> Result<()> {
    let hash: ObjectHash = hash.parse()?;
    info!(hash = %hash, "decoding object");
    let mut reader = repo.open_object(&hash)?;

    let header = ObjectHeader::decode(&mut reader)?;
    debug!(kind = header.kind.as_str(), len = header.len, "decoded header");
    writeln!(out, "{header}")?;

    match GitObject::decode_body(&header, &mut reader)? {
        GitObject::Commit(commit) if fields => write!(out, "{}", commit.fields()?)?,
        obj => obj.write_to(out)?,
    }
    Ok(())
}
