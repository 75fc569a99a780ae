//! CSV reader wrapped as a [`Cursor`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, RowBindError};
use crate::storage::csv::CsvCursorConfig;
use crate::storage::{Cell, Cursor};

/// Cursor over CSV records; the header row names the columns.
pub struct CsvCursor<R: Read> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
    null_marker: Option<String>,
}

impl CsvCursor<File> {
    /// Opens a CSV file as a cursor.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad config, or a cursor error if the
    /// file cannot be opened.
    pub fn from_path(path: &Path, config: &CsvCursorConfig) -> Result<Self> {
        config.validate()?;
        let file = File::open(path).map_err(RowBindError::cursor)?;
        Ok(Self::build(file, config))
    }
}

impl<R: Read> CsvCursor<R> {
    /// Wraps any reader of CSV text.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the config is invalid.
    pub fn from_reader(rdr: R, config: &CsvCursorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(rdr, config))
    }

    fn build(rdr: R, config: &CsvCursorConfig) -> Self {
        let reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter as u8)
            .quote(config.quote as u8)
            .escape(config.escape.map(|c| c as u8))
            .double_quote(config.escape.is_none())
            .trim(if config.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            })
            .has_headers(true)
            .from_reader(rdr);

        CsvCursor {
            reader,
            record: csv::StringRecord::new(),
            null_marker: config.null_marker.clone(),
        }
    }
}

impl<R: Read> Cursor for CsvCursor<R> {
    type Error = csv::Error;

    fn columns(&mut self) -> std::result::Result<Vec<String>, Self::Error> {
        let headers = self.reader.headers()?;
        Ok(headers.iter().map(String::from).collect())
    }

    fn advance(&mut self) -> std::result::Result<bool, Self::Error> {
        self.reader.read_record(&mut self.record)
    }

    fn scan(&mut self, cells: &mut [Cell]) -> std::result::Result<(), Self::Error> {
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = match self.record.get(index) {
                Some(field) if self.null_marker.as_deref() == Some(field) => None,
                Some(field) => Some(field.to_string()),
                None => None,
            };
        }
        Ok(())
    }
}
