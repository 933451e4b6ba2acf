//! Error types for STT decoding and encoding.

/// Errors that can occur while decoding or encoding a status table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SttError {
    /// Zero bytes or zero records supplied
    #[error("input is empty")]
    EmptyInput,

    /// Fewer bytes (decode) or records (encode) than a minimal table holds
    #[error("input too short: got {actual}, need at least {minimum}")]
    BelowMinimumSize { actual: usize, minimum: usize },

    /// Record count does not fill a whole number of bytes
    #[error("record count {0} is not a multiple of 4")]
    UnalignedRecordCount(usize),
}
