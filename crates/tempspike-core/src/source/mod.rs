pub(crate) mod codes;

pub use codes::CodesFileSource;

use thiserror::Error;

use crate::bitbuf::BitCapture;

/// One capture emitted by a source: the transmission's bit rows plus
/// where it came from.
#[derive(Debug, Clone)]
pub struct CaptureEvent {
    /// Capture time as fractional Unix seconds, when the log carried one.
    pub ts: Option<f64>,
    /// 1-based source line number.
    pub line: u64,
    pub capture: BitCapture,
}

pub trait CaptureSource {
    fn next_capture(&mut self) -> Result<Option<CaptureEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("codes parse error: {0}")]
    Codes(String),
}

impl From<codes::error::CodesSourceError> for SourceError {
    fn from(value: codes::error::CodesSourceError) -> Self {
        match value {
            codes::error::CodesSourceError::Io(err) => SourceError::Io(err),
            codes::error::CodesSourceError::Malformed { line, message } => {
                SourceError::Codes(format!("line {line}: {message}"))
            }
        }
    }
}
