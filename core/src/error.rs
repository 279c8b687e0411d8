use crate::types::Tag;
use thiserror::Error;

/// Result type for devident operations
pub type Result<T> = std::result::Result<T, DevidentError>;

/// Error types for devident operations
#[derive(Error, Debug)]
pub enum DevidentError {
    /// Input bytes are not recognizable as a DICOM stream
    #[error("not a DICOM stream: {0}")]
    InvalidFormat(String),

    /// A matched element declares more value bytes than the buffer holds
    ///
    /// Raised internally by the scanner and logged; it never fails a whole
    /// extraction, the affected attribute is simply reported absent.
    #[error("truncated element {tag}: need {needed} bytes, {available} remain")]
    TruncatedElement {
        tag: Tag,
        needed: usize,
        available: usize,
    },
}
