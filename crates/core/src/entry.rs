// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ledger entry data model and validation
//!
//! An entry is the atomic unit of the ledger: one member (`author`) changing
//! another member's (`target`) reputation by a signed point value with a
//! required reason. Entries are never updated in place; the only mutations
//! anywhere in the system are insert and delete-by-id.
//!
//! Two entry points funnel into the same insert:
//! - [`NewEntry::award`] — the standard member path, points restricted to ±1
//! - [`NewEntry::direct`] — the moderator path, arbitrary signed points
//!
//! The asymmetry is deliberate and load-bearing: moderators use the wide
//! constructor to correct totals in bulk.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for malformed or missing ledger input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("reason must not be empty")]
    EmptyReason,
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
    #[error("invalid entry id: {0:?}")]
    InvalidEntryId(String),
    #[error("invalid point value: {0:?}")]
    InvalidPointValue(String),
    #[error("award value must be +1 or -1, got {0}")]
    AwardOutOfRange(i64),
}

/// Platform member identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub u64);

impl UserId {
    /// Parse a user id from raw form input
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        text.trim()
            .parse()
            .map(UserId)
            .map_err(|_| ValidationError::InvalidUserId(text.to_string()))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ledger entry, assigned by the store
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntryId(pub i64);

impl EntryId {
    /// Parse an entry id from raw form input
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        text.trim()
            .parse()
            .map(EntryId)
            .map_err(|_| ValidationError::InvalidEntryId(text.to_string()))
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable record of a reputation change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationEntry {
    pub id: EntryId,
    pub target: UserId,
    pub author: UserId,
    pub points: i64,
    pub reason: String,
}

/// A validated insert request (no id yet; the store assigns one)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub target: UserId,
    pub author: UserId,
    pub points: i64,
    pub reason: String,
}

impl NewEntry {
    /// Standard award/revoke path: points must be exactly +1 or -1
    pub fn award(
        author: UserId,
        target: UserId,
        points: i64,
        reason: &str,
    ) -> Result<Self, ValidationError> {
        if points != 1 && points != -1 {
            return Err(ValidationError::AwardOutOfRange(points));
        }
        Self::direct(author, target, points, reason)
    }

    /// Moderator path: arbitrary signed points, reason still required
    pub fn direct(
        author: UserId,
        target: UserId,
        points: i64,
        reason: &str,
    ) -> Result<Self, ValidationError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ValidationError::EmptyReason);
        }
        Ok(Self {
            target,
            author,
            points,
            reason: reason.to_string(),
        })
    }
}

/// Parse a signed point value from raw form input
pub fn parse_points(text: &str) -> Result<i64, ValidationError> {
    text.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPointValue(text.to_string()))
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
