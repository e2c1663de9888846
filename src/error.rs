//! Errors from checked padding and fill parsing.

use std::collections::TryReserveError;

use thiserror::Error;

/// Reasons a checked padding request can fail.
#[derive(Error, Debug)]
pub enum LeftPadError {
    /// Requested width is above the configured limit.
    #[error("width {width} exceeds limit {limit}")]
    WidthTooLarge {
        /// Requested width.
        width: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// Padded length in bytes does not fit in `usize`.
    #[error("padding to width {width} overflows the buffer size")]
    CapacityOverflow {
        /// Requested width.
        width: usize,
    },

    /// Buffer for the padded string could not be reserved.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    /// Fill argument is not exactly one character.
    #[error("invalid fill character: {0:?}")]
    InvalidFill(String),
}
