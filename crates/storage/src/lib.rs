//! kudos-storage: SQLite-backed ledger store
//!
//! Owns the `reputation` table and every SQL-level operation on it. One
//! connection behind a mutex serializes all store access; callers never see
//! the connection.

mod store;

pub use store::{LedgerStore, StorageError};
