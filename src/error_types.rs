use thiserror::Error;

/// Error type returned by disjoint-set forest operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionFindError {
    /// The requested number of sites is negative
    #[error("Invalid site count {0}")]
    InvalidArgument(i64),
    /// Site index is outside the range of the forest
    #[error("Site {site} is out of range for a forest of {len} sites")]
    OutOfRange { site: usize, len: usize },
}

/// Error type returned by symbol table lookups and cursors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("Key {0} not found")]
    /// A lookup required an entry that is not in the table
    KeyNotFound(i32),
    #[error("Cursor is exhausted")]
    /// An accessor was called after the traversal completed
    IteratorExhausted,
}

/// Failure of a session operation.  Wraps the error of the underlying data
/// structure, or the I/O error raised while writing to the print target.
#[derive(Error, Debug)]
pub enum SessionError<E> {
    #[error(transparent)]
    Operation(E),
    #[error("Print target failure: {0}")]
    Io(#[from] std::io::Error),
    /// The operation was applied, but logging it failed.  `outcome` is the
    /// value the operation returned.
    #[error("Operation completed but could not be logged: {source}")]
    Log {
        outcome: bool,
        source: std::io::Error,
    },
}

impl<E> SessionError<E> {
    /// Outcome of an operation that was applied before the failure, if any.
    pub fn outcome(&self) -> Option<bool> {
        match self {
            SessionError::Log { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
}
