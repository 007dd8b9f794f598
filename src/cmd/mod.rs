mod branch;
mod cat_file;

use super::{GitObject, ObjectHash, ObjectHeader, Repository, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Branch,
    CatFile { hash: String, fields: bool },
    Unknown,
}

impl Command {
    pub fn run<W: Write>(self, repo: &Repository, out: &mut W) -> Result<()> {
        match self {
            Self::Branch => branch::run(repo, out),
            Self::CatFile { hash, fields } => cat_file::run(repo, &hash, fields, out),
            Self::Unknown => {
                writeln!(out, "No flag selected.. Try --help|-h")?;
                Ok(())
            }
        }
    }
}
