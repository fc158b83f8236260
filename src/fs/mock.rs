// src/fs/mock.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};

use super::FileSystem;

/// In-memory filesystem for tests.
///
/// Stores file contents as strings; `append` mimics the external simulation
/// process growing its log between polls.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<String>) {
        let mut files = self.files.lock().unwrap();
        files.insert(path.as_ref().to_path_buf(), content.into());
    }

    pub fn append(&self, path: impl AsRef<Path>, content: &str) {
        let mut files = self.files.lock().unwrap();
        files
            .entry(path.as_ref().to_path_buf())
            .or_default()
            .push_str(content);
    }

    /// Current contents, for asserting the monitor never writes to the log.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let files = self.files.lock().unwrap();
        files.get(path.as_ref()).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path)
    }

    fn read_tail(&self, path: &Path, max_bytes: u64) -> Result<String> {
        let files = self.files.lock().unwrap();
        let content = files
            .get(path)
            .ok_or_else(|| anyhow!("File not found: {:?}", path))?;

        let bytes = content.as_bytes();
        if bytes.len() as u64 <= max_bytes {
            return Ok(content.clone());
        }

        let window = &bytes[bytes.len() - max_bytes as usize..];
        let mut text = String::from_utf8_lossy(window).into_owned();
        match text.find('\n') {
            Some(idx) => {
                text.drain(..=idx);
            }
            None => text.clear(),
        }
        Ok(text)
    }
}
