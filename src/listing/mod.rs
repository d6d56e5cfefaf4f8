//! Directory listing module
//!
//! Enumerates the immediate children of a directory as files (with size)
//! and directories. Symlinks are followed; anything that resolves to neither
//! a regular file nor a directory is skipped, as is any entry whose name is
//! not valid UTF-8.

mod entry;
mod error;

pub use entry::{DirectoryEntry, EntryKind};
pub use error::ListError;

use crate::logger;
use std::path::Path;
use tokio::fs;

/// List the immediate children of `dir` in the order the OS returns them
pub async fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>, ListError> {
    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|e| ListError::from_io(dir, e))?;

    let mut entries = Vec::new();
    while let Some(child) = read_dir
        .next_entry()
        .await
        .map_err(|e| ListError::from_io(dir, e))?
    {
        // Names must round-trip exactly, so non-UTF-8 names are skipped
        let name = match child.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                logger::log_debug(&format!("Skipping {raw:?}: name is not valid UTF-8"));
                continue;
            }
        };

        // fs::metadata follows symlinks, so a link is classified by its target
        let metadata = match fs::metadata(child.path()).await {
            Ok(m) => m,
            Err(e) => {
                logger::log_debug(&format!("Skipping '{name}': {e}"));
                continue;
            }
        };

        if metadata.is_file() {
            entries.push(DirectoryEntry::file(name, metadata.len()));
        } else if metadata.is_dir() {
            entries.push(DirectoryEntry::directory(name));
        } else {
            logger::log_debug(&format!("Skipping '{name}': not a file or directory"));
        }
    }

    Ok(entries)
}
