//! In-memory cursor over owned rows.

use thiserror::Error;

use crate::storage::{Cell, Cursor};

/// Errors raised by [`MemoryCursor`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryCursorError {
    /// Cursor used after close.
    #[error("cursor is closed")]
    Closed,
    /// `scan` called before `advance` or after exhaustion.
    #[error("no current row")]
    NoCurrentRow,
    /// Row width does not match the column count.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        actual: usize,
        expected: usize,
    },
    /// Simulated driver failure.
    #[error("simulated failure: {0}")]
    Simulated(String),
}

/// Cursor over a fixed column list and rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    /// Index of the current row; `None` before the first advance.
    current: Option<usize>,
    closed: bool,
    close_count: usize,
    /// Fail the advance onto this row index.
    fail_at_row: Option<usize>,
    fail_on_close: bool,
}

impl MemoryCursor {
    /// Creates a cursor with the given columns and no rows.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryCursor {
            columns: columns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Appends a row of cells; `None` is NULL.
    #[must_use]
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.push_row(cells.into_iter().map(|c| c.map(Into::into)).collect());
        self
    }

    /// Appends a row of cells.
    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    /// Makes the advance onto row `row` (zero-based) fail.
    #[must_use]
    pub fn failing_at_row(mut self, row: usize) -> Self {
        self.fail_at_row = Some(row);
        self
    }

    /// Makes `close` fail.
    #[must_use]
    pub fn failing_on_close(mut self) -> Self {
        self.fail_on_close = true;
        self
    }

    /// Returns true once the cursor has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns how many times `close` was called.
    #[must_use]
    pub fn close_count(&self) -> usize {
        self.close_count
    }

    /// Returns the number of rows advanced onto so far.
    #[must_use]
    pub fn rows_read(&self) -> usize {
        self.current.map_or(0, |row| (row + 1).min(self.rows.len()))
    }

    fn check_open(&self) -> Result<(), MemoryCursorError> {
        if self.closed {
            Err(MemoryCursorError::Closed)
        } else {
            Ok(())
        }
    }
}

impl Cursor for MemoryCursor {
    type Error = MemoryCursorError;

    fn columns(&mut self) -> Result<Vec<String>, Self::Error> {
        self.check_open()?;
        Ok(self.columns.clone())
    }

    fn advance(&mut self) -> Result<bool, Self::Error> {
        self.check_open()?;
        let next = self.current.map_or(0, |row| row + 1);
        if self.fail_at_row == Some(next) {
            return Err(MemoryCursorError::Simulated(format!("fetch of row {next}")));
        }
        self.current = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn scan(&mut self, cells: &mut [Cell]) -> Result<(), Self::Error> {
        self.check_open()?;
        let row_index = self
            .current
            .filter(|&row| row < self.rows.len())
            .ok_or(MemoryCursorError::NoCurrentRow)?;
        let row = &self.rows[row_index];
        if row.len() != cells.len() || row.len() != self.columns.len() {
            return Err(MemoryCursorError::RowWidth {
                row: row_index,
                actual: row.len(),
                expected: self.columns.len(),
            });
        }
        cells.clone_from_slice(row);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.close_count += 1;
        self.closed = true;
        if self.fail_on_close {
            return Err(MemoryCursorError::Simulated("close".into()));
        }
        Ok(())
    }
}
