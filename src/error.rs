use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Which input a missing source refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Vocabulary,
    Corpus,
}

impl std::fmt::Display for SourceRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceRole::Vocabulary => write!(f, "vocabulary"),
            SourceRole::Corpus => write!(f, "corpus"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("{role} source missing: {}", .path.display())]
    SourceMissing {
        role: SourceRole,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EnrichError {
    pub fn is_source_missing(&self) -> bool {
        matches!(self, EnrichError::SourceMissing { .. })
    }
}

/// Reason a vocabulary block was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("block has {0} non-empty line(s), need at least 2")]
    TooShort(usize),
    #[error("block header has no word")]
    EmptyHeader,
}
