//! Listing failures

use std::io;
use std::path::{Path, PathBuf};

/// Why a directory could not be enumerated
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("permission denied: '{}'", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no such directory: '{}'", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot list '{}': {source}", .path.display())]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            _ => Self::Other { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kinds_map_to_variants() {
        let path = Path::new("hive");
        let denied = ListError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, ListError::PermissionDenied { .. }));
        assert_eq!(denied.to_string(), "permission denied: 'hive'");

        let missing = ListError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(missing, ListError::NotFound { .. }));

        let other = ListError::from_io(path, io::Error::other("disk on fire"));
        assert!(matches!(other, ListError::Other { .. }));
        assert_eq!(other.to_string(), "cannot list 'hive': disk on fire");
    }
}
