//! Directory entry types

use serde::Serialize;

/// What a listed entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// One immediate child of the listed directory
///
/// Serializes as `{"name", "size", "type"}`; `size` is omitted for directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size: Some(size),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            kind: EntryKind::Directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_serializes_name_size_type() {
        let json = serde_json::to_string(&DirectoryEntry::file("a.txt", 5)).unwrap();
        assert_eq!(json, r#"{"name":"a.txt","size":5,"type":"file"}"#);
    }

    #[test]
    fn test_directory_has_no_size_key() {
        let json = serde_json::to_string(&DirectoryEntry::directory("b")).unwrap();
        assert_eq!(json, r#"{"name":"b","type":"directory"}"#);
    }
}
