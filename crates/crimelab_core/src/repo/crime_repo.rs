//! Crime repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `crimes` table.
//! - Keep SQL details and row decoding inside the persistence boundary.
//!
//! # Invariants
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Statements and row iterators never outlive the method that opened them.

use crate::db::DbError;
use crate::model::crime::{Crime, CrimeId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CRIME_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    date,
    solved
FROM crimes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for crime persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted crime data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for crime CRUD operations.
pub trait CrimeRepository {
    fn add_crime(&self, crime: &Crime) -> RepoResult<CrimeId>;
    fn update_crime(&self, crime: &Crime) -> RepoResult<()>;
    fn get_crime(&self, id: CrimeId) -> RepoResult<Option<Crime>>;
    fn list_crimes(&self) -> RepoResult<Vec<Crime>>;
    fn is_empty(&self) -> RepoResult<bool>;
}

/// SQLite-backed crime repository.
pub struct SqliteCrimeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCrimeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CrimeRepository for SqliteCrimeRepository<'_> {
    fn add_crime(&self, crime: &Crime) -> RepoResult<CrimeId> {
        self.conn.execute(
            "INSERT INTO crimes (uuid, title, date, solved)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                crime.uuid.to_string(),
                crime.title.as_str(),
                crime.date,
                bool_to_int(crime.solved),
            ],
        )?;

        Ok(crime.uuid)
    }

    fn update_crime(&self, crime: &Crime) -> RepoResult<()> {
        // Zero affected rows is a deliberate no-op, not an error: callers
        // treat update-of-missing-id as uninteresting.
        self.conn.execute(
            "UPDATE crimes
             SET
                title = ?1,
                date = ?2,
                solved = ?3
             WHERE uuid = ?4;",
            params![
                crime.title.as_str(),
                crime.date,
                bool_to_int(crime.solved),
                crime.uuid.to_string(),
            ],
        )?;

        Ok(())
    }

    fn get_crime(&self, id: CrimeId) -> RepoResult<Option<Crime>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CRIME_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_crime_row(row)?));
        }

        Ok(None)
    }

    fn list_crimes(&self) -> RepoResult<Vec<Crime>> {
        // Full-table scan with no ORDER BY; row order is an engine detail.
        let mut stmt = self.conn.prepare(CRIME_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut crimes = Vec::new();

        while let Some(row) = rows.next()? {
            crimes.push(parse_crime_row(row)?);
        }

        Ok(crimes)
    }

    fn is_empty(&self) -> RepoResult<bool> {
        let has_rows: i64 =
            self.conn
                .query_row("SELECT EXISTS(SELECT 1 FROM crimes);", [], |row| row.get(0))?;
        Ok(has_rows == 0)
    }
}

fn parse_crime_row(row: &Row<'_>) -> RepoResult<Crime> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in crimes.uuid"))
    })?;

    Ok(Crime {
        uuid,
        title: row.get("title")?,
        date: row.get("date")?,
        solved: row.get::<_, i64>("solved")? != 0,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
