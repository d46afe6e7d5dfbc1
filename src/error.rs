use std::collections::BTreeSet;
use std::path::PathBuf;

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Errors that abort a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse annotation {}: {source}", .path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: serde_xml_rs::Error,
    },

    #[error("invalid integer {value:?} for field '{field}' in {}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("expected exactly {expected} classes, found {}: {found:?}", .found.len())]
    ClassCount {
        expected: usize,
        found: BTreeSet<String>,
    },

    #[error("failed to write annotations to {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`ConvertError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Configuration,
}

impl ConvertError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            // JSON errors only arise while writing the output document
            Self::Io { .. } | Self::Json { .. } => ErrorKind::Io,
            Self::Xml { .. } | Self::InvalidNumber { .. } => ErrorKind::Parse,
            Self::ClassCount { .. } => ErrorKind::Configuration,
        }
    }
}
