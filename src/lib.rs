mod cmd;
mod error;
mod git_object;
mod hash;
mod reader;
mod refs;
mod repository;

pub const GIT_DIR: &str = ".git";
const GIT_OBJ_DIR: &str = "objects";
const GIT_HEADS_DIR: &str = "refs/heads";
const GIT_HEAD_FILE: &str = "HEAD";

pub use cmd::Command;
pub use error::Error;
pub use git_object::{
    Blob, Commit, CommitFields, GitObject, ObjectHeader, ObjectKind, TreeEntry, TRUNCATED_SIZE,
};
pub use hash::{ObjectHash, SHA1_HASH_SIZE};
pub use reader::DelimitedReader;
pub use refs::{Branch, Refs};
pub use repository::Repository;
pub type Result<T> = std::result::Result<T, Error>;
