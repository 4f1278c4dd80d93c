// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reputation service: business rules over the ledger store
//!
//! The service validates and delegates; it holds no mutable state of its
//! own. Cooldown and owner gating happen in the command surface before a
//! call reaches this layer.

use crate::error::ServiceError;
use crate::history::HistoryView;
use crate::session::{ManageSession, SessionHandle};
use kudos_core::{Clock, Config, EntryId, NewEntry, ReputationEntry, SystemClock, UserId};
use kudos_storage::LedgerStore;
use std::sync::Arc;
use tracing::debug;

/// A member's entries and aggregate total, read under one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub entries: Vec<ReputationEntry>,
    pub total: i64,
}

/// Validation and business rules on top of the ledger store
pub struct ReputationService<C: Clock = SystemClock> {
    store: Arc<LedgerStore>,
    config: Config,
    clock: C,
}

impl ReputationService<SystemClock> {
    pub fn new(store: Arc<LedgerStore>, config: Config) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<C: Clock> ReputationService<C> {
    pub fn with_clock(store: Arc<LedgerStore>, config: Config, clock: C) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Idempotently create the ledger table. The caller has already applied
    /// the owner gate.
    pub fn ensure_schema(&self) -> Result<(), ServiceError> {
        Ok(self.store.ensure_schema()?)
    }

    /// Create a ±1 entry from one member targeting another.
    ///
    /// Self-reference is rejected before any persistence: the failed case
    /// has zero side effects.
    pub fn award(
        &self,
        actor: UserId,
        target: UserId,
        points: i64,
        reason: &str,
    ) -> Result<EntryId, ServiceError> {
        if actor == target {
            return Err(ServiceError::SelfReference { user: actor });
        }
        let entry = NewEntry::award(actor, target, points, reason)?;
        let id = self.store.insert(&entry)?;
        debug!(id = id.0, actor = actor.0, target = target.0, points, "award recorded");
        Ok(id)
    }

    /// A member's entries and total, both observing the same commit point
    pub fn history(&self, target: UserId) -> Result<History, ServiceError> {
        let (entries, total) = self.store.history(target)?;
        Ok(History { entries, total })
    }

    /// Open a read-only paginated history view over the current snapshot
    pub fn open_history(&self, target: UserId) -> Result<HistoryView<C>, ServiceError> {
        let History { entries, total } = self.history(target)?;
        Ok(HistoryView::new(
            target,
            entries,
            total,
            self.config.history.page_size,
            self.config.history.timeout,
            self.clock.clone(),
        ))
    }

    /// Open a moderator management session for the target. The caller has
    /// already applied the owner gate.
    pub fn open_session(
        &self,
        moderator: UserId,
        target: UserId,
    ) -> Result<SessionHandle<C>, ServiceError> {
        let session = ManageSession::open(
            Arc::clone(&self.store),
            moderator,
            target,
            self.config.manage.page_size,
            self.config.manage.timeout,
            self.clock.clone(),
        )?;
        Ok(SessionHandle::new(session))
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
