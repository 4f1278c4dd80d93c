//! kudos-core: Core library for the kudos reputation ledger
//!
//! This crate provides:
//! - The ledger entry data model and its validation rules
//! - The pagination engine shared by the history and management views
//! - A clock abstraction for testable session expiry
//! - TOML-based configuration

pub mod clock;
pub mod config;
pub mod entry;
pub mod pager;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{Config, ConfigError, ViewConfig};
pub use entry::{parse_points, EntryId, NewEntry, ReputationEntry, UserId, ValidationError};
pub use pager::{ControlPolicy, Controls, Pager};
