//! Configuration constants for pagesim.

/// Number of frames simulated when none is given on the command line.
///
/// Three frames is the classic textbook setting: small enough that a short
/// trace produces evictions, large enough for FIFO and LRU to diverge.
pub const DEFAULT_FRAME_CAPACITY: usize = 3;

/// Input trace read by the driver when no path is given.
pub const DEFAULT_INPUT_FILE: &str = "seq_pag.csv";

/// Suffix appended to the lowercased policy label to name a report file.
///
/// `FIFO` is written to `fifo_results.txt`, `LRU` to `lru_results.txt`.
pub const REPORT_FILE_SUFFIX: &str = "_results.txt";

/// Placeholder rendered for a frame slot that holds no page.
pub const EMPTY_SLOT_MARKER: &str = "-";

/// Default field separator of the input trace.
pub const FIELD_DELIMITER: u8 = b',';
