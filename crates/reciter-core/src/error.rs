use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("File unreadable: {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    MalformedLine(#[from] MalformedLine),
}

impl LoadError {
    /// Classify an I/O failure on `path`
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// A list line with no headword
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed line {line_number}: {content:?}")]
pub struct MalformedLine {
    /// 1-based
    pub line_number: usize,
    /// Raw line without its terminator, BOM included
    pub content: String,
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = LoadError::from_io(
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, LoadError::FileNotFound { .. }));
        assert_eq!(err.to_string(), "File not found: missing.txt");
    }

    #[test]
    fn test_from_io_other_is_unreadable() {
        let err = LoadError::from_io(
            Path::new("locked.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, LoadError::FileUnreadable { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_malformed_line_converts() {
        let err: LoadError = MalformedLine {
            line_number: 3,
            content: "|no headword|/x/".to_string(),
        }
        .into();
        assert!(matches!(err, LoadError::MalformedLine(MalformedLine { line_number: 3, .. })));
        assert_eq!(err.to_string(), "Malformed line 3: \"|no headword|/x/\"");
    }
}
