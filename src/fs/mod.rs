// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface for the monitor's log reads.
///
/// The monitor only ever needs two operations against the (externally owned,
/// append-only) log file: an existence check and a bounded read of the tail.
pub trait FileSystem: Send + Sync + Debug {
    fn exists(&self, path: &Path) -> bool;

    /// Read at most `max_bytes` from the end of the file.
    ///
    /// When the file is longer than the window, the first (possibly partial)
    /// line of the window is discarded so callers only ever see whole lines.
    fn read_tail(&self, path: &Path, max_bytes: u64) -> Result<String>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_tail(&self, path: &Path, max_bytes: u64) -> Result<String> {
        let mut file =
            fs::File::open(path).with_context(|| format!("opening file {:?}", path))?;
        let len = file
            .metadata()
            .with_context(|| format!("reading metadata of {:?}", path))?
            .len();

        let truncated = len > max_bytes;
        if truncated {
            file.seek(SeekFrom::End(-(max_bytes as i64)))
                .with_context(|| format!("seeking to tail of {:?}", path))?;
        }

        let mut buf = Vec::with_capacity(len.min(max_bytes) as usize);
        file.read_to_end(&mut buf)
            .with_context(|| format!("reading tail of {:?}", path))?;

        let mut text = String::from_utf8_lossy(&buf).into_owned();
        if truncated {
            // The window almost certainly starts mid-line; drop up to and
            // including the first newline.
            match text.find('\n') {
                Some(idx) => {
                    text.drain(..=idx);
                }
                None => text.clear(),
            }
        }

        Ok(text)
    }
}
