// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Moderator management session
//!
//! A [`ManageSession`] is bound to one target member and holds the current
//! page, the most recently fetched entry snapshot, and the inactivity
//! deadline. It is a two-state machine: `Active`, with every operation a
//! self-loop that refreshes the deadline, and `Expired`, which is terminal —
//! once a session observes itself past the inactivity window, every further
//! operation fails fast with [`ServiceError::SessionExpired`] and never
//! touches the store.
//!
//! Mutations validate their raw form input completely before any store
//! access; a [`ValidationError`] leaves both the store and the session state
//! untouched. A successful mutation re-fetches the snapshot and clamps the
//! page (deletions can shrink the page range out from under the viewer). A
//! failed mutation performs no refresh: stale state is preferable to
//! rendering a store the mutation never reached.
//!
//! [`SessionHandle`] wraps the session in a mutex so concurrent commands
//! against the same session are strictly ordered. Independent sessions never
//! contend.
//!
//! [`ValidationError`]: kudos_core::ValidationError

use crate::error::ServiceError;
use kudos_core::{
    parse_points, Clock, ControlPolicy, EntryId, NewEntry, Pager, ReputationEntry, SystemClock,
    UserId,
};
use kudos_storage::LedgerStore;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Render datum for one page of a paginated view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Zero-based current page index
    pub index: usize,
    /// Total number of pages (at least 1)
    pub count: usize,
    /// Entries visible on this page, oldest first
    pub entries: Vec<ReputationEntry>,
    /// Enabled state of the navigation controls
    pub controls: kudos_core::Controls,
}

pub(crate) fn render(pager: &Pager, entries: &[ReputationEntry], policy: ControlPolicy) -> Page {
    Page {
        index: pager.page(),
        count: pager.page_count(),
        entries: entries[pager.bounds()].to_vec(),
        controls: pager.controls(policy),
    }
}

/// Stateful editing session over one member's ledger entries
pub struct ManageSession<C: Clock = SystemClock> {
    store: Arc<LedgerStore>,
    moderator: UserId,
    target: UserId,
    pager: Pager,
    entries: Vec<ReputationEntry>,
    timeout: Duration,
    last_activity: Instant,
    expired: bool,
    clock: C,
}

impl<C: Clock> ManageSession<C> {
    /// Open a session and perform the initial fetch
    pub fn open(
        store: Arc<LedgerStore>,
        moderator: UserId,
        target: UserId,
        page_size: usize,
        timeout: Duration,
        clock: C,
    ) -> Result<Self, ServiceError> {
        let mut session = Self {
            store,
            moderator,
            target,
            pager: Pager::new(page_size),
            entries: Vec::new(),
            timeout,
            last_activity: clock.now(),
            expired: false,
            clock,
        };
        session.fetch()?;
        info!(moderator = moderator.0, target = target.0, "management session opened");
        Ok(session)
    }

    pub fn target(&self) -> UserId {
        self.target
    }

    /// Render the current page without touching the activity deadline
    pub fn page(&self) -> Page {
        render(&self.pager, &self.entries, ControlPolicy::PerEdge)
    }

    /// Re-read the target's entries and clamp the page into range
    pub fn refresh(&mut self) -> Result<Page, ServiceError> {
        self.check_active()?;
        self.fetch()?;
        self.touch();
        Ok(self.page())
    }

    /// Move to the previous page; a no-op at page 0, but still a re-render
    pub fn prev(&mut self) -> Result<Page, ServiceError> {
        self.check_active()?;
        self.pager.prev();
        self.touch();
        Ok(self.page())
    }

    /// Move to the next page; a no-op at the last page, but still a re-render
    pub fn next(&mut self) -> Result<Page, ServiceError> {
        self.check_active()?;
        self.pager.next();
        self.touch();
        Ok(self.page())
    }

    /// Insert an entry from raw form input, authored by the acting moderator.
    ///
    /// All three fields are validated before any store access; the moderator
    /// path accepts an arbitrary signed point value.
    pub fn add_entry(
        &mut self,
        target: &str,
        points: &str,
        reason: &str,
    ) -> Result<Page, ServiceError> {
        self.check_active()?;
        let target = UserId::parse(target)?;
        let points = parse_points(points)?;
        let entry = NewEntry::direct(self.moderator, target, points, reason)?;

        let id = self.store.insert(&entry)?;
        debug!(id = id.0, session_target = self.target.0, "entry added via session");
        self.fetch()?;
        self.touch();
        Ok(self.page())
    }

    /// Delete an entry by raw id input, then refresh regardless of whether a
    /// row was actually removed
    pub fn delete_entry(&mut self, id: &str) -> Result<Page, ServiceError> {
        self.check_active()?;
        let id = EntryId::parse(id)?;

        let removed = self.store.delete_by_id(id)?;
        debug!(id = id.0, removed, "entry deleted via session");
        self.fetch()?;
        self.touch();
        Ok(self.page())
    }

    fn fetch(&mut self) -> Result<(), ServiceError> {
        let entries = self.store.entries_for(self.target)?;
        self.pager.set_len(entries.len());
        self.entries = entries;
        Ok(())
    }

    fn check_active(&mut self) -> Result<(), ServiceError> {
        if self.expired {
            return Err(ServiceError::SessionExpired);
        }
        if self.clock.now().duration_since(self.last_activity) > self.timeout {
            self.expired = true;
            info!(target = self.target.0, "management session expired");
            return Err(ServiceError::SessionExpired);
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.last_activity = self.clock.now();
    }
}

/// Shared handle serializing access to one [`ManageSession`]
#[derive(Clone)]
pub struct SessionHandle<C: Clock = SystemClock> {
    inner: Arc<Mutex<ManageSession<C>>>,
}

impl<C: Clock> SessionHandle<C> {
    pub fn new(session: ManageSession<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn page(&self) -> Page {
        self.lock().page()
    }

    pub fn refresh(&self) -> Result<Page, ServiceError> {
        self.lock().refresh()
    }

    pub fn prev(&self) -> Result<Page, ServiceError> {
        self.lock().prev()
    }

    pub fn next(&self) -> Result<Page, ServiceError> {
        self.lock().next()
    }

    pub fn add_entry(&self, target: &str, points: &str, reason: &str) -> Result<Page, ServiceError> {
        self.lock().add_entry(target, points, reason)
    }

    pub fn delete_entry(&self, id: &str) -> Result<Page, ServiceError> {
        self.lock().delete_entry(id)
    }

    fn lock(&self) -> MutexGuard<'_, ManageSession<C>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
