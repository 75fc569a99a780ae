//! CSV sources as tabular cursors.
//!
//! The first record supplies the column names. Fields equal to the
//! configured NULL marker become absent cells, so SQL dumps written with
//! `\N` keep their NULLs.

mod cursor;

pub use cursor::CsvCursor;

use serde::{Deserialize, Serialize};

use crate::error::RowBindError;

/// MySQL's NULL marker in `SELECT ... INTO OUTFILE` and `mysqldump --tab`.
pub const DEFAULT_NULL_MARKER: &str = "\\N";

/// Configuration for reading CSV as a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvCursorConfig {
    /// Field separator (default: ',').
    pub delimiter: char,
    /// Quote character (default: '"').
    pub quote: char,
    /// Escape character; None means doubled quotes (default: None).
    pub escape: Option<char>,
    /// Field text read as NULL; None disables NULLs (default: `\N`).
    ///
    /// Matched after the CSV reader strips quoting, so a quoted `"\N"` is
    /// NULL as well.
    pub null_marker: Option<String>,
    /// Trim whitespace around fields (default: false).
    pub trim: bool,
}

impl Default for CsvCursorConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            escape: None,
            null_marker: Some(DEFAULT_NULL_MARKER.to_string()),
            trim: false,
        }
    }
}

impl CsvCursorConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Sets the escape character.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Sets the NULL marker, or disables NULLs with None.
    #[must_use]
    pub fn with_null_marker(mut self, marker: Option<&str>) -> Self {
        self.null_marker = marker.map(String::from);
        self
    }

    /// Sets whether to trim whitespace around fields.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Creates a config for tab-separated dumps.
    #[must_use]
    pub fn tsv() -> Self {
        Self::default().with_delimiter('\t')
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the delimiter, quote, or escape character is not ASCII
    /// - the delimiter equals the quote character
    pub fn validate(&self) -> Result<(), RowBindError> {
        let chars = [
            ("delimiter", Some(self.delimiter)),
            ("quote", Some(self.quote)),
            ("escape", self.escape),
        ];
        for (name, c) in chars {
            if let Some(c) = c.filter(|c| !c.is_ascii()) {
                return Err(RowBindError::ValidationError(format!(
                    "{name} must be an ASCII character, got {c:?}"
                )));
            }
        }

        if self.delimiter == self.quote {
            return Err(RowBindError::ValidationError(
                "delimiter and quote must differ".to_string(),
            ));
        }

        Ok(())
    }
}
