use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCountError {
    #[error("{} (No such file or directory)", .0.display())]
    FileNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logger setup failed: {0}")]
    Logger(String),

    #[error("Invalid number of arguments supplied: {0}")]
    InvalidArguments(String),
}

impl WordCountError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => WordCountError::FileNotFound(path),
            _ => WordCountError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let err = WordCountError::io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        match err {
            WordCountError::FileNotFound(path) => assert_eq!(path, PathBuf::from("missing.txt")),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_other_kinds_keep_source() {
        let err = WordCountError::io("locked.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        match err {
            WordCountError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("locked.txt"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("Expected Io, got {other:?}"),
        }
    }
}
