use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("too many rows: {rows}")]
    TooManyRows { rows: usize },
    #[error("frame too short: {bits} bits")]
    TooShort { bits: usize },
    #[error("frame too long: {bits} bits")]
    TooLong { bits: usize },
    #[error("sync word not found")]
    SyncNotFound,
    #[error("trailer complement mismatch: {checksum:#04x} vs {complement:#04x}")]
    ChecksumFormatInvalid { checksum: u8, complement: u8 },
    #[error("checksum mismatch: expected {expected:#04x}, computed {computed:#04x}")]
    ChecksumMismatch { expected: u8, computed: u8 },
}

impl DecodeError {
    /// Stable label for aggregation in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::TooManyRows { .. } => "too_many_rows",
            DecodeError::TooShort { .. } => "frame_too_short",
            DecodeError::TooLong { .. } => "frame_too_long",
            DecodeError::SyncNotFound => "sync_not_found",
            DecodeError::ChecksumFormatInvalid { .. } => "checksum_format_invalid",
            DecodeError::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}
