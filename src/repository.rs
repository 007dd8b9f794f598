use super::{DelimitedReader, ObjectHash, Refs, Result, GIT_OBJ_DIR};
use flate2::read::ZlibDecoder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle on a `.git` directory.
#[derive(Debug, Clone)]
pub struct Repository {
    git_dir: PathBuf,
}

impl Repository {
    pub fn new<P: AsRef<Path>>(git_dir: P) -> Self {
        Self {
            git_dir: git_dir.as_ref().into(),
        }
    }

    pub fn refs(&self) -> Refs {
        Refs::new(&self.git_dir)
    }

    /// `<git-dir>/objects/<first 2 hex>/<remaining 38 hex>`
    pub fn object_path(&self, hash: &ObjectHash) -> PathBuf {
        let hex = hash.hex();
        self.git_dir
            .join(GIT_OBJ_DIR)
            .join(&hex[..2])
            .join(&hex[2..])
    }

    /// Opens a loose object as a decompressed stream. The file is closed
    /// when the returned reader is dropped.
    pub fn open_object(&self, hash: &ObjectHash) -> Result<DelimitedReader<ZlibDecoder<File>>> {
        let path = self.object_path(hash);
        debug!(path = %path.display(), "opening object");

        let f = File::open(path)?;
        Ok(DelimitedReader::new(ZlibDecoder::new(f)))
    }
}
