//! DuckDB-backed stuff table
//!
//! Owns the schema, administrative insertion (seeding) and the windowed read
//! used by the pagination service.

use super::RecordStore;
use crate::error::{Error, Result};
use crate::pagination::PageWindow;
use crate::types::{NewStuff, Stuff, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
use duckdb::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// DuckDB rejects LIMIT/OFFSET values of 2^62 and above
const MAX_OFFSET: u64 = (1 << 62) - 1;

/// Stuff table stored in DuckDB
pub struct StuffDatabase {
    /// DuckDB connection, one statement at a time
    conn: Mutex<Connection>,
    /// Backing file, `None` for in-memory databases
    path: Option<PathBuf>,
}

impl StuffDatabase {
    /// Open a fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database(format!("Failed to create DuckDB connection: {e}")))?;
        Self::from_connection(conn, None)
    }

    /// Open (or create) a database file with the schema applied
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|e| {
            Error::database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        Self::from_connection(conn, Some(path))
    }

    /// Open a file when a path is given, otherwise an in-memory database
    pub fn open_or_in_memory(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Self::open_in_memory(),
        }
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        let db = Self {
            conn: Mutex::new(conn),
            path,
        };
        db.create_schema()?;
        Ok(db)
    }

    fn create_schema(&self) -> Result<()> {
        let ddl = format!(
            "CREATE SEQUENCE IF NOT EXISTS stuff_id_seq START 1;
             CREATE TABLE IF NOT EXISTS stuff (
                 id BIGINT PRIMARY KEY DEFAULT nextval('stuff_id_seq'),
                 name VARCHAR NOT NULL CHECK (length(name) <= {NAME_MAX_LEN}),
                 description VARCHAR CHECK (description IS NULL OR length(description) <= {DESCRIPTION_MAX_LEN})
             );"
        );

        self.lock()?
            .execute_batch(&ddl)
            .map_err(|e| Error::database(format!("Failed to create schema: {e}")))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::database("Connection lock poisoned"))
    }

    /// Insert one record, returning it with its assigned id
    pub fn insert(&self, stuff: &NewStuff) -> Result<Stuff> {
        stuff.validate()?;

        let conn = self.lock()?;
        let id: i64 = conn
            .query_row(
                "INSERT INTO stuff (name, description) VALUES (?, ?) RETURNING id",
                params![stuff.name, stuff.description],
                |row| row.get(0),
            )
            .map_err(|e| Error::database(format!("Failed to insert stuff: {e}")))?;

        tracing::debug!("Inserted stuff {} ({})", id, stuff.name);

        Ok(Stuff {
            id,
            name: stuff.name.clone(),
            description: stuff.description.clone(),
        })
    }

    /// Insert many records in one transaction
    pub fn insert_all(&self, records: &[NewStuff]) -> Result<Vec<Stuff>> {
        for record in records {
            record.validate()?;
        }

        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| Error::database(format!("Failed to begin transaction: {e}")))?;

        let mut inserted = Vec::with_capacity(records.len());
        for record in records {
            let id: i64 = tx
                .query_row(
                    "INSERT INTO stuff (name, description) VALUES (?, ?) RETURNING id",
                    params![record.name, record.description],
                    |row| row.get(0),
                )
                .map_err(|e| Error::database(format!("Failed to insert stuff: {e}")))?;
            inserted.push(Stuff {
                id,
                name: record.name.clone(),
                description: record.description.clone(),
            });
        }

        tx.commit()
            .map_err(|e| Error::database(format!("Failed to commit transaction: {e}")))?;

        Ok(inserted)
    }

    /// Insert `count` demo records named `Stuff Item {n}`, numbering on from
    /// the current row count
    pub fn seed_demo(&self, count: usize) -> Result<Vec<Stuff>> {
        let start = self.count()?;
        let records: Vec<NewStuff> = (start + 1..=start + count).map(NewStuff::demo).collect();
        let inserted = self.insert_all(&records)?;

        tracing::info!(
            "Seeded {} stuff items into {}",
            inserted.len(),
            self.location()
        );
        Ok(inserted)
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .lock()?
            .query_row("SELECT COUNT(*) FROM stuff", [], |row| row.get(0))
            .map_err(|e| Error::database(format!("Failed to count stuff: {e}")))?;
        Ok(count as usize)
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Human-readable location for logging
    pub fn location(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| ":memory:".to_string(), |p| p.display().to_string())
    }
}

impl RecordStore for StuffDatabase {
    fn fetch_window(&self, window: PageWindow) -> Result<Vec<Stuff>> {
        let offset = window.offset.min(MAX_OFFSET);
        let query = format!(
            "SELECT id, name, description FROM stuff ORDER BY id ASC LIMIT {} OFFSET {offset}",
            window.limit
        );

        tracing::debug!("Executing query: {}", query);

        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&query)
            .map_err(|e| Error::database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Stuff {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                })
            })
            .map_err(|e| Error::database(format!("Failed to query stuff: {e}")))?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::database(format!("Failed to read stuff row: {e}")))
    }
}

impl std::fmt::Debug for StuffDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StuffDatabase")
            .field("location", &self.location())
            .finish_non_exhaustive()
    }
}
