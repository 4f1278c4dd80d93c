// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only paginated history view
//!
//! Snapshots a member's entries and total at open time and pages over the
//! snapshot; it never re-reads the store. Navigation controls follow the
//! static policy: both disabled permanently when everything fits on one page.
//! The view shares the management session's inactivity expiry so abandoned
//! views go inert.

use crate::error::ServiceError;
use crate::session::{render, Page};
use kudos_core::{Clock, ControlPolicy, Pager, ReputationEntry, SystemClock, UserId};
use std::time::{Duration, Instant};

/// Read-only pager over a history snapshot
pub struct HistoryView<C: Clock = SystemClock> {
    target: UserId,
    entries: Vec<ReputationEntry>,
    total: i64,
    pager: Pager,
    timeout: Duration,
    last_activity: Instant,
    expired: bool,
    clock: C,
}

impl<C: Clock> HistoryView<C> {
    pub fn new(
        target: UserId,
        entries: Vec<ReputationEntry>,
        total: i64,
        page_size: usize,
        timeout: Duration,
        clock: C,
    ) -> Self {
        let pager = Pager::with_len(page_size, entries.len());
        Self {
            target,
            entries,
            total,
            pager,
            timeout,
            last_activity: clock.now(),
            expired: false,
            clock,
        }
    }

    pub fn target(&self) -> UserId {
        self.target
    }

    /// Aggregate total at the time the view was opened
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Render the current page without touching the activity deadline
    pub fn page(&self) -> Page {
        render(&self.pager, &self.entries, ControlPolicy::Static)
    }

    pub fn prev(&mut self) -> Result<Page, ServiceError> {
        self.check_active()?;
        self.pager.prev();
        self.touch();
        Ok(self.page())
    }

    pub fn next(&mut self) -> Result<Page, ServiceError> {
        self.check_active()?;
        self.pager.next();
        self.touch();
        Ok(self.page())
    }

    fn check_active(&mut self) -> Result<(), ServiceError> {
        if self.expired {
            return Err(ServiceError::SessionExpired);
        }
        if self.clock.now().duration_since(self.last_activity) > self.timeout {
            self.expired = true;
            return Err(ServiceError::SessionExpired);
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.last_activity = self.clock.now();
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
