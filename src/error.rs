//! Errors raised when copying padding-free layouts to or from byte buffers

use thiserror::Error;

/// Reasons a byte buffer cannot hold a layout
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The buffer is shorter or longer than the layout
    #[error("Buffer size mismatch: layout needs {expected} bytes, got {actual}")]
    Size {
        /// Size of the layout
        expected: usize,
        /// Length of the buffer
        actual: usize,
    },

    /// The buffer does not split evenly into records
    #[error("Buffer of {actual} bytes is not a whole number of {record} byte records")]
    Slop {
        /// Size of one record
        record: usize,
        /// Length of the buffer
        actual: usize,
    },

    /// The buffer address does not satisfy the layout's alignment
    #[error("Buffer is not aligned for a layout with {align} byte alignment")]
    Align {
        /// Alignment the layout requires
        align: usize,
    },
}

/// Result of the buffer copies
pub type Result<T> = std::result::Result<T, Error>;
