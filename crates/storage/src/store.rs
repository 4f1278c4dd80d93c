// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable append/delete store for reputation entries
//!
//! The schema is the durable contract: table `reputation` with columns
//! `id`, `target_user_id`, `author_user_id`, `point_value`, `reason`.
//! Entries are only ever inserted and deleted by id; `ORDER BY id` gives the
//! oldest-first ordering the paginated views depend on, so it is part of the
//! contract of [`LedgerStore::entries_for`], not an incidental property of
//! rowid assignment.
//!
//! One `rusqlite::Connection` behind a mutex serializes every operation.
//! [`LedgerStore::history`] performs both of its reads under a single lock
//! acquisition so the entry list and the total observe the same commit point.

use kudos_core::{EntryId, NewEntry, ReputationEntry, UserId};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur in store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS reputation (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        target_user_id INTEGER,
        author_user_id INTEGER,
        point_value INTEGER,
        reason TEXT
    );
";

/// SQLite-backed reputation ledger
pub struct LedgerStore {
    conn: Mutex<Connection>,
}

impl LedgerStore {
    /// Open or create the database at the given path
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let conn = Connection::open(path)?;

        // WAL mode allows readers to proceed while a write is in flight
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (tests and ephemeral deployments)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Idempotently create the ledger table
    pub fn ensure_schema(&self) -> Result<(), StorageError> {
        self.lock().execute_batch(SCHEMA)?;
        info!("reputation table ready");
        Ok(())
    }

    /// Append a new entry and return its assigned id
    pub fn insert(&self, entry: &NewEntry) -> Result<EntryId, StorageError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO reputation (target_user_id, author_user_id, point_value, reason)
             VALUES (?1, ?2, ?3, ?4)",
            params![entry.target.0, entry.author.0, entry.points, entry.reason],
        )?;
        let id = EntryId(conn.last_insert_rowid());
        debug!(id = id.0, target = entry.target.0, points = entry.points, "inserted entry");
        Ok(id)
    }

    /// Remove at most one entry; a missing id is not an error and reports
    /// zero removed
    pub fn delete_by_id(&self, id: EntryId) -> Result<usize, StorageError> {
        let removed = self
            .lock()
            .execute("DELETE FROM reputation WHERE id = ?1", params![id.0])?;
        debug!(id = id.0, removed, "delete entry");
        Ok(removed)
    }

    /// All entries for a target, ordered by ascending id (insertion order)
    pub fn entries_for(&self, target: UserId) -> Result<Vec<ReputationEntry>, StorageError> {
        entries_for(&self.lock(), target)
    }

    /// Aggregate total for a target; zero when no entries exist
    pub fn total_for(&self, target: UserId) -> Result<i64, StorageError> {
        total_for(&self.lock(), target)
    }

    /// Entries and total under one lock acquisition, so both reads observe
    /// the same commit point
    pub fn history(&self, target: UserId) -> Result<(Vec<ReputationEntry>, i64), StorageError> {
        let conn = self.lock();
        let entries = entries_for(&conn, target)?;
        let total = total_for(&conn, target)?;
        Ok((entries, total))
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn entries_for(conn: &Connection, target: UserId) -> Result<Vec<ReputationEntry>, StorageError> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, target_user_id, author_user_id, point_value, reason
         FROM reputation WHERE target_user_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![target.0], |row| {
        Ok(ReputationEntry {
            id: EntryId(row.get(0)?),
            target: UserId(row.get(1)?),
            author: UserId(row.get(2)?),
            points: row.get(3)?,
            reason: row.get(4)?,
        })
    })?;
    let mut entries = Vec::new();
    for row in rows {
        entries.push(row?);
    }
    Ok(entries)
}

fn total_for(conn: &Connection, target: UserId) -> Result<i64, StorageError> {
    let mut stmt = conn.prepare_cached(
        "SELECT COALESCE(SUM(point_value), 0) FROM reputation WHERE target_user_id = ?1",
    )?;
    let total = stmt.query_row(params![target.0], |row| row.get(0))?;
    Ok(total)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
