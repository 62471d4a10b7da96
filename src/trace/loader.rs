//! Trace loader - reads delimited text into an access sequence.

use std::fs;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::common::config::FIELD_DELIMITER;
use crate::common::{Error, PageId, Result};

/// Parses delimited page traces.
///
/// # Format
/// ```text
/// 1,2,3,4
/// 1,2,5
///                  <- blank lines are skipped
/// 1,2,"3"          <- quoting and surrounding whitespace are ignored
/// ```
/// Records are read top to bottom and fields left to right, so the trace
/// above is `1 2 3 4 1 2 5 1 2 3`. Records may differ in length. Every field
/// must be an integer; an empty field such as the one a trailing comma
/// produces is an error.
#[derive(Debug, Clone, Copy)]
pub struct TraceLoader {
    delimiter: u8,
}

impl TraceLoader {
    /// Loader for comma-separated traces.
    pub fn new() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }

    /// Use `delimiter` between fields.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Parse a whole trace held in memory.
    ///
    /// # Errors
    /// Returns `Error::MalformedInput` for the first field that is not an
    /// integer.
    pub fn parse(&self, input: &str) -> Result<Vec<PageId>> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        self.read(input.as_bytes())
    }

    /// Read and parse the trace stored at `path`.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, or
    /// `Error::MalformedInput` if it does not parse.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<PageId>> {
        let content = fs::read_to_string(path)?;
        self.parse(&content)
    }

    fn read<R: io::Read>(&self, source: R) -> Result<Vec<PageId>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(source);

        let mut pages = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            // Whitespace-only line
            if record.iter().all(str::is_empty) {
                continue;
            }

            let line = record.position().map_or(0, |pos| pos.line() as usize);
            for (field_idx, field) in record.iter().enumerate() {
                let id = field.parse::<i64>().map_err(|_| Error::MalformedInput {
                    line,
                    field: field_idx + 1,
                    value: field.to_string(),
                })?;
                pages.push(PageId::new(id));
            }
        }

        Ok(pages)
    }
}

impl Default for TraceLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load a comma-separated trace from `path`.
pub fn load_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    TraceLoader::new().load(path)
}

/// Parse a comma-separated trace held in memory.
pub fn parse_sequence(input: &str) -> Result<Vec<PageId>> {
    TraceLoader::new().parse(input)
}

/// Map a reader error onto the crate error, keeping I/O failures as I/O.
fn csv_error(err: csv::Error) -> Error {
    let line = err.position().map_or(0, |pos| pos.line() as usize);
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::Io(e),
        kind => Error::MalformedInput {
            line,
            field: 0,
            value: format!("{:?}", kind),
        },
    }
}
