use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {kind}")]
    Syntax { line: usize, kind: SyntaxError },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The syntax error kind, if this is a syntax error.
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match self {
            Error::Syntax { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Ways a single input line can fail to describe a path.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum SyntaxError {
    #[error("empty path component")]
    EmptyComponent,

    #[error("file size {0:?} is not a non-negative integer")]
    InvalidSize(String),

    #[error("component {0:?} has more than one space")]
    TooManyTokens(String),

    #[error("{0:?} is a file and cannot contain other entries")]
    NotAFolder(String),
}
