//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core only ever raises [`Error::InvalidConfiguration`].
/// The other variants come from the trace loader and the report writer.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a trace or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame capacity below one.
    ///
    /// Raised before any simulation step runs.
    #[error("Invalid frame capacity {capacity}: at least one frame is required")]
    InvalidConfiguration { capacity: usize },

    /// A field of the input trace is not an integer page number.
    ///
    /// `line` and `field` are 1-based.
    #[error("Malformed input at line {line}, field {field}: {value:?} is not a page number")]
    MalformedInput {
        line: usize,
        field: usize,
        value: String,
    },
}
