//! Cursor abstraction over executed queries.
//!
//! The row reader consumes any [`Cursor`]: an open result set exposing its
//! column names, row advancement, and one nullable text cell per column.
//! Two adapters are provided:
//! - In-memory results ([`MemoryCursor`])
//! - CSV sources with a NULL marker ([`csv`])

mod guard;
mod memory;

pub mod csv;

pub use guard::CursorGuard;
pub use memory::{MemoryCursor, MemoryCursorError};

pub use self::csv::{CsvCursor, CsvCursorConfig};

/// One column's value in one row: `None` is SQL NULL.
pub type Cell = Option<String>;

/// An open tabular result, positioned before its first row.
///
/// Cursors are single-owner and single-reader. Blocking, cancellation, and
/// timeouts belong to the implementation and surface through `Error`.
pub trait Cursor {
    /// Error raised by the underlying driver.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the ordered column names of the executing query.
    ///
    /// # Errors
    ///
    /// Returns the driver error if column metadata is unavailable.
    fn columns(&mut self) -> Result<Vec<String>, Self::Error>;

    /// Moves to the next row, returning false once the result is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the next row cannot be fetched.
    fn advance(&mut self) -> Result<bool, Self::Error>;

    /// Copies the current row's cells into `cells`, one per column.
    ///
    /// # Errors
    ///
    /// Returns the driver error if the row cannot be read.
    fn scan(&mut self, cells: &mut [Cell]) -> Result<(), Self::Error>;

    /// Releases the cursor. Called exactly once by [`CursorGuard`].
    ///
    /// # Errors
    ///
    /// Returns the driver error if the release fails.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Error = C::Error;

    fn columns(&mut self) -> Result<Vec<String>, Self::Error> {
        (**self).columns()
    }

    fn advance(&mut self) -> Result<bool, Self::Error> {
        (**self).advance()
    }

    fn scan(&mut self, cells: &mut [Cell]) -> Result<(), Self::Error> {
        (**self).scan(cells)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}
