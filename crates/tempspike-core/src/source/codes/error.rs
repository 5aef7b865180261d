use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodesSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Malformed { line: u64, message: String },
}

pub(crate) fn malformed(line: u64, message: impl Into<String>) -> CodesSourceError {
    CodesSourceError::Malformed {
        line,
        message: message.into(),
    }
}
