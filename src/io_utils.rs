//! Error reporting for the `leftpad` binary.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::LeftPadError;

/// A failure surfaced to the user, always carrying an actionable hint.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing input/output failed.
    #[error("Error {operation} {target}: {source}. {}", io_suggestion(.source))]
    Io {
        /// What the binary was doing, e.g. `"reading input file"`.
        operation: &'static str,
        /// Quoted path, or `stdin`/`stdout`.
        target: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Padding or argument validation failed.
    #[error("{context}: {}", cli_hint(.source))]
    Pad {
        /// Which step failed, e.g. `"bad --fill"`.
        context: &'static str,
        /// Underlying padding error.
        source: LeftPadError,
    },
}

impl CliError {
    /// I/O failure on a named file.
    pub fn file(operation: &'static str, path: &Path, source: io::Error) -> Self {
        CliError::Io {
            operation,
            target: format!("'{}'", path.display()),
            source,
        }
    }

    /// I/O failure on one of the standard streams (`"stdin"` or `"stdout"`).
    pub fn stream(operation: &'static str, stream: &str, source: io::Error) -> Self {
        CliError::Io {
            operation,
            target: stream.to_owned(),
            source,
        }
    }

    /// Padding failure with the step it happened in.
    pub fn pad(context: &'static str, source: LeftPadError) -> Self {
        CliError::Pad { context, source }
    }
}

/// Suggestion shown after an I/O error, keyed on its kind.
pub fn io_suggestion(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::NotFound => "Check that the file exists and the path is correct.",
        io::ErrorKind::PermissionDenied => "Check permissions or run as a different user.",
        io::ErrorKind::InvalidData => "Input must be valid UTF-8 text.",
        io::ErrorKind::BrokenPipe => "The reader closed the output early.",
        io::ErrorKind::WriteZero => "Disk may be full. Free up space and try again.",
        _ if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check permissions or free up disk space.",
    }
}

/// Return an actionable hint for a padding error variant.
pub fn cli_hint(err: &LeftPadError) -> String {
    use LeftPadError::*;
    match err {
        WidthTooLarge { width, limit } => {
            format!("width {width} exceeds limit {limit}. Raise --max-width or lower --width.")
        }
        CapacityOverflow { width } => format!("width {width} is too large to allocate."),
        Alloc(e) => format!("{e}. Try a smaller width."),
        InvalidFill(fill) => format!("fill {fill:?} must be exactly one character."),
    }
}
