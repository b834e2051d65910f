use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// End of input inside a quoted array element.
    #[error("unterminated quote opened at line {line}")]
    UnterminatedQuote { line: usize },

    /// End of input inside an array, outside any quote.
    #[error("unterminated array opened at line {line}")]
    UnterminatedArray { line: usize },

    /// The encoder was asked to write a key or value the dialect cannot carry.
    #[error("cannot encode `{key}`: {reason}")]
    Unrepresentable { key: String, reason: &'static str },
}

impl Error {
    /// Line number attached to a fatal parse error, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnterminatedQuote { line } | Error::UnterminatedArray { line } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
