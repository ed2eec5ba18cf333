use std::collections::HashMap;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::Store;

const PRICECARD_HOME_ENV: &str = "PRICECARD_HOME";
const STORE_FILE: &str = "store.json";

/// JSON-file backed store, rewritten on every `set`
#[derive(Debug)]
pub(crate) struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// `$PRICECARD_HOME/store.json`, else `~/.cache/pricecard/store.json`
    pub(crate) fn default_path() -> Option<PathBuf> {
        if let Ok(dir) = env::var(PRICECARD_HOME_ENV)
            && !dir.is_empty()
        {
            return Some(PathBuf::from(dir).join(STORE_FILE));
        }
        let home = dirs::home_dir()?;
        Some(home.join(".cache").join("pricecard").join(STORE_FILE))
    }

    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub(crate) fn open(path: PathBuf) -> Self {
        let values = load_values(&path).unwrap_or_default();
        Self { path, values }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let file = File::create(&self.path).map_err(write_err)?;
        serde_json::to_writer_pretty(file, &self.values).map_err(StoreError::Encode)
    }
}

fn load_values(path: &Path) -> Option<HashMap<String, String>> {
    let file = File::open(path).ok()?;
    serde_json::from_reader(file).ok()
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_persist_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(STORE_FILE);

        let mut store = FileStore::open(path.clone());
        assert_eq!(store.get("notice_close_date"), None);
        store.set("notice_close_date", "2026-10-18").unwrap();

        let reopened = FileStore::open(path);
        assert_eq!(
            reopened.get("notice_close_date").as_deref(),
            Some("2026-10-18")
        );
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(path.clone());
        assert_eq!(store.get("anything"), None);
        store.set("k", "v").unwrap();
        assert_eq!(FileStore::open(path).get("k").as_deref(), Some("v"));
    }

    #[test]
    fn unwritable_path_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a dir").unwrap();

        let mut store = FileStore::open(blocker.join(STORE_FILE));
        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(store.path(), blocker.join(STORE_FILE));
    }
}
