//! File-backed durable store
//!
//! Each key maps to `{root}/{key}.snapshot`. Writes go to a temp file that
//! is fsynced and then renamed over the target, so readers only ever see a
//! complete old value or a complete new one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::warn;

use crate::error::{Result, StoreError};

use super::DurableStore;

/// Durable store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    const EXTENSION: &'static str = "snapshot";
    const TMP_SUFFIX: &'static str = ".tmp";

    /// Open or create a store in the given directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path holding the value for `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    /// Keys are used as file names, so only a conservative charset is allowed
    fn validate_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(StoreError::Config(format!("invalid durable store key: {:?}", key)));
        }
        Ok(())
    }
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: Bytes) -> Result<()> {
        let path = self.path_for(key)?;
        let mut tmp_name = path.clone().into_os_string();
        tmp_name.push(Self::TMP_SUFFIX);
        let tmp_path = PathBuf::from(tmp_name);

        {
            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&tmp_path)?;
            file.write_all(&value)?;
            file.sync_all()?;
        }

        fs::rename(&tmp_path, &path)?;

        // Directory fsync makes the rename durable; platforms that cannot
        // open or sync a directory only get a warning
        match File::open(&self.root).and_then(|dir| dir.sync_all()) {
            Ok(()) => {}
            Err(e) => warn!(
                root = %self.root.display(),
                error = %e,
                "could not sync store directory after rename"
            ),
        }

        Ok(())
    }
}
