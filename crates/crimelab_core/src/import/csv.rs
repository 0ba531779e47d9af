//! CSV line decoding for crime bulk import.
//!
//! # Responsibility
//! - Parse `uuid,title,date,solved` lines into `Crime` records.
//! - Report line-numbered parse failures.
//!
//! # Invariants
//! - The format has no header, no quoting and no escape support; a comma
//!   inside the title corrupts the parse.
//! - Fields past the fourth are ignored.

use crate::model::crime::Crime;
use crate::repo::crime_repo::RepoError;
use chrono::{NaiveDate, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const FIELDS_PER_LINE: usize = 4;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-line parse failure, carrying the 1-based line number.
#[derive(Debug)]
pub enum CsvParseError {
    /// Line has fewer than the four required fields.
    MalformedLine { line: usize, field_count: usize },
    /// First field is not a valid UUID string.
    MalformedIdentifier { line: usize, value: String },
    /// Third field does not match the `yyyy-MM-dd` date format.
    MalformedDate { line: usize, value: String },
}

impl Display for CsvParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLine { line, field_count } => write!(
                f,
                "line {line}: expected {FIELDS_PER_LINE} fields, got {field_count}"
            ),
            Self::MalformedIdentifier { line, value } => {
                write!(f, "line {line}: invalid uuid `{value}`")
            }
            Self::MalformedDate { line, value } => {
                write!(f, "line {line}: invalid date `{value}`, expected yyyy-MM-dd")
            }
        }
    }
}

impl Error for CsvParseError {}

/// Aggregate failure at the import boundary.
///
/// Wraps everything that can stop an import: a parse failure, a read failure
/// on the input stream, or an insert failure from the repository.
#[derive(Debug)]
pub enum ImportError {
    Parse(CsvParseError),
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "failed to read import stream: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<CsvParseError> for ImportError {
    fn from(value: CsvParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<std::io::Error> for ImportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ImportError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Parses one `uuid,title,date,solved` line into a `Crime`.
///
/// # Contract
/// - `date` is `yyyy-MM-dd`, interpreted as UTC midnight.
/// - `solved` is `"1"` for true; any other value is false.
/// - Fields past the fourth are accepted and ignored.
pub fn parse_crime_line(line: &str, line_number: usize) -> Result<Crime, CsvParseError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < FIELDS_PER_LINE {
        return Err(CsvParseError::MalformedLine {
            line: line_number,
            field_count: fields.len(),
        });
    }

    let uuid = Uuid::parse_str(fields[0]).map_err(|_| CsvParseError::MalformedIdentifier {
        line: line_number,
        value: fields[0].to_string(),
    })?;

    let date = NaiveDate::parse_from_str(fields[2], DATE_FORMAT).map_err(|_| {
        CsvParseError::MalformedDate {
            line: line_number,
            value: fields[2].to_string(),
        }
    })?;
    let date_epoch_ms = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();

    let solved = fields[3] == "1";

    Ok(Crime::with_id(uuid, fields[1], date_epoch_ms, solved))
}
