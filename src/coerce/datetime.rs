//! Fixed-layout `YYYY-MM-DD HH:MM:SS` parsing.

use chrono::NaiveDateTime;

use crate::error::{Result, RowBindError};
use crate::types::Timestamp;

/// All-zero date some storage engines write for "unset".
pub const ZERO_DATE_SENTINEL: &str = "0000-00-00 00:00:00";

/// Layout accepted for timestamp cells; `d` marks a digit.
const LAYOUT: &[u8; 19] = b"dddd-dd-dd dd:dd:dd";

/// chrono format matching [`LAYOUT`].
const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `text` as a UTC timestamp.
///
/// When `remap_zero_date` is set, the zero-date sentinel yields
/// [`Timestamp::min`].
///
/// # Errors
///
/// Returns a coercion error if `text` does not match the layout exactly or
/// names an impossible date or time.
pub fn parse_timestamp(text: &str, remap_zero_date: bool) -> Result<Timestamp> {
    if remap_zero_date && text == ZERO_DATE_SENTINEL {
        return Ok(Timestamp::min());
    }

    let bytes = text.as_bytes();
    let layout_ok = bytes.len() == LAYOUT.len()
        && bytes.iter().zip(LAYOUT).all(|(&b, &l)| match l {
            b'd' => b.is_ascii_digit(),
            sep => b == sep,
        });
    if !layout_ok {
        return Err(RowBindError::coercion(
            text,
            "TIMESTAMP",
            "expected layout YYYY-MM-DD HH:MM:SS",
        ));
    }

    // chrono reads second 60 as a leap second; the layout has none.
    if &text[17..] == "60" {
        return Err(RowBindError::coercion(text, "TIMESTAMP", "second out of range"));
    }

    NaiveDateTime::parse_from_str(text, FORMAT)
        .map(|naive| Timestamp::from(naive.and_utc()))
        .map_err(|e| RowBindError::coercion(text, "TIMESTAMP", e))
}
