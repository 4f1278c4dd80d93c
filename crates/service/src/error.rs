// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the reputation service

use kudos_core::{UserId, ValidationError};
use kudos_storage::StorageError;
use thiserror::Error;

/// Errors that can occur in service and session operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A member tried to give or remove reputation from themselves
    #[error("members cannot change their own reputation (user {user})")]
    SelfReference { user: UserId },
    /// The session's inactivity window elapsed; open a new one
    #[error("session expired, start a new one")]
    SessionExpired,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}
