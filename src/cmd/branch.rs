use super::{Repository, Result};
use std::io::Write;
use tracing::info;

pub(crate) fn run<W: Write>(repo: &Repository, out: &mut W) -> Result<()> {
    let branches = repo.refs().branches()?;
    info!(count = branches.len(), "listing branches");

    for branch in branches {
        writeln!(out, "{branch}")?;
    }
    Ok(())
}
