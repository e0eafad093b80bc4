//! Row-source integration.
//!
//! A row source supplies ordered `(column, value)` pairs per record,
//! one record at a time (e.g. rows from a user table). This module
//! builds the delimited message for each row and pushes it through a
//! redacting logger; raw values never reach a sink directly.

use crate::error::Result;
use crate::logger::Logger;
use pd_redact::SEPARATOR;

/// Supplies ordered column/value pairs, one record at a time.
pub trait RowSource {
    /// The next record, or `None` when exhausted.
    fn next_row(&mut self) -> Option<Vec<(String, String)>>;
}

impl<I> RowSource for I
where
    I: Iterator<Item = Vec<(String, String)>>,
{
    fn next_row(&mut self) -> Option<Vec<(String, String)>> {
        self.next()
    }
}

/// Build the `col=value` message for one record.
///
/// Every segment is terminated by the separator, matching the format
/// the redactor is configured for.
pub fn row_message(columns: &[(String, String)], separator: &str) -> String {
    let mut message = String::new();
    for (column, value) in columns {
        message.push_str(column);
        message.push('=');
        message.push_str(value);
        message.push_str(separator);
    }
    message
}

/// Log every row from the source at `Info` through the given logger.
///
/// Returns the number of records logged.
pub fn log_rows<S: RowSource>(logger: &Logger, source: &mut S) -> Result<usize> {
    let mut count = 0;
    while let Some(row) = source.next_row() {
        logger.info(&row_message(&row, SEPARATOR))?;
        count += 1;
    }
    Ok(count)
}
