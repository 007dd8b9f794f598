//! Branch listing.
//!
//! Branches live as plain files under `refs/heads`, each holding the hex
//! name of the commit it points to. `HEAD` either holds
//! `ref: refs/heads/<name>` or, when detached, a hash.

use super::{Error, Result, GIT_HEADS_DIR, GIT_HEAD_FILE};
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub hash: String,
    pub current: bool,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.current {
            write!(f, "* {} {}", self.name, self.hash)
        } else {
            write!(f, "{} {}", self.name, self.hash)
        }
    }
}

#[derive(Debug)]
pub struct Refs {
    git_dir: PathBuf,
}

impl Refs {
    pub fn new<P: AsRef<Path>>(git_dir: P) -> Self {
        Self {
            git_dir: git_dir.as_ref().into(),
        }
    }

    /// Name of the checked out branch, `None` for a detached HEAD.
    pub fn current_branch(&self) -> Result<Option<String>> {
        let head = read_first_line(self.git_dir.join(GIT_HEAD_FILE))?;
        let re = Regex::new(SYMREF_REGEX).map_err(anyhow::Error::from)?;

        Ok(re.captures(&head).map(|caps| caps[1].to_string()))
    }

    /// All branches sorted by name, the checked out one flagged.
    pub fn branches(&self) -> Result<Vec<Branch>> {
        let current = self.current_branch()?;
        debug!(current = current.as_deref(), "read HEAD");

        let mut branches = vec![];
        for entry in fs::read_dir(self.git_dir.join(GIT_HEADS_DIR))? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let hash = read_first_line(entry.path())?;
            if hash.is_empty() {
                return Err(Error::InvalidHash(format!("branch {name} is empty")));
            }

            branches.push(Branch {
                current: current.as_deref() == Some(name.as_str()),
                name,
                hash,
            });
        }

        branches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(branches)
    }
}

fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}
