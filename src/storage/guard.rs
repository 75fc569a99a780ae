//! Scoped cursor ownership with guaranteed release.

use crate::error::{Result, RowBindError};
use crate::storage::{Cell, Cursor};

/// Owns a cursor for the duration of one read and closes it on every exit path.
///
/// On success the caller should call [`CursorGuard::close`] so that a failed
/// release is reported. If the guard is dropped instead (an early `?`
/// return), the cursor is still closed and a release failure is logged,
/// since the original error takes precedence.
pub struct CursorGuard<C: Cursor> {
    cursor: C,
    closed: bool,
}

impl<C: Cursor> CursorGuard<C> {
    /// Takes ownership of an open cursor.
    #[must_use]
    pub fn new(cursor: C) -> Self {
        CursorGuard {
            cursor,
            closed: false,
        }
    }

    /// Returns the cursor's column names.
    ///
    /// # Errors
    ///
    /// Returns a cursor error on driver failure.
    pub fn columns(&mut self) -> Result<Vec<String>> {
        self.cursor.columns().map_err(RowBindError::cursor)
    }

    /// Advances to the next row.
    ///
    /// # Errors
    ///
    /// Returns a cursor error on driver failure.
    pub fn advance(&mut self) -> Result<bool> {
        self.cursor.advance().map_err(RowBindError::cursor)
    }

    /// Reads the current row into `cells`.
    ///
    /// # Errors
    ///
    /// Returns a cursor error on driver failure.
    pub fn scan(&mut self, cells: &mut [Cell]) -> Result<()> {
        self.cursor.scan(cells).map_err(RowBindError::cursor)
    }

    /// Closes the cursor, reporting a release failure.
    ///
    /// # Errors
    ///
    /// Returns a cursor error if the driver fails to release the cursor.
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        self.cursor.close().map_err(RowBindError::cursor)
    }
}

impl<C: Cursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.cursor.close() {
            log::warn!("failed to close cursor after error: {e}");
        }
    }
}
