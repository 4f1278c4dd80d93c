// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination engine shared by the history and management views
//!
//! A [`Pager`] windows an ordered sequence of `len` items into fixed-size
//! pages. The current page is clamped into `[0, max_page]` after every length
//! change, because deletions can shrink `max_page` below the page the viewer
//! was on. Navigation saturates at the boundaries; a boundary press is a
//! no-op on the index but still counts as a re-render for the caller.
//!
//! The two views disable their navigation controls differently and the
//! policies are kept distinct:
//! - the read-only history view disables both controls permanently when the
//!   whole sequence fits on one page ([`ControlPolicy::Static`])
//! - the moderator view recomputes per position after every navigation or
//!   refresh ([`ControlPolicy::PerEdge`])

use serde::Serialize;
use std::ops::Range;

/// Windowing state over an ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    len: usize,
}

impl Pager {
    /// Create a pager over an empty sequence. A page size of zero is clamped
    /// up to one; the engine's `P > 0` precondition holds unconditionally.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            len: 0,
        }
    }

    /// Create a pager over a sequence of known length
    pub fn with_len(page_size: usize, len: usize) -> Self {
        let mut pager = Self::new(page_size);
        pager.set_len(len);
        pager
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Highest valid page index: `(len - 1) / page_size`, 0 for an empty
    /// sequence
    pub fn max_page(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.len - 1) / self.page_size
        }
    }

    /// Total number of pages (always at least 1, matching the rendered
    /// "Page 1/1" of an empty view)
    pub fn page_count(&self) -> usize {
        self.max_page() + 1
    }

    /// Record a new sequence length and clamp the current page into range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.page = self.page.min(self.max_page());
    }

    /// Move to the previous page, saturating at 0
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Move to the next page, saturating at `max_page`
    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.max_page());
    }

    /// Index range of the current page, suitable for slicing the sequence
    pub fn bounds(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    /// Enabled state of the navigation controls under the given policy
    pub fn controls(&self, policy: ControlPolicy) -> Controls {
        match policy {
            ControlPolicy::Static => {
                let multi = self.max_page() > 0;
                Controls {
                    prev_enabled: multi,
                    next_enabled: multi,
                }
            }
            ControlPolicy::PerEdge => Controls {
                prev_enabled: self.page > 0,
                next_enabled: self.page < self.max_page(),
            },
        }
    }
}

/// How a view decides which navigation controls to disable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPolicy {
    /// Both controls disabled iff the sequence fits on one page
    Static,
    /// Each control disabled at its own edge, recomputed per position
    PerEdge,
}

/// Render datum for the navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[cfg(test)]
#[path = "pager_tests.rs"]
mod tests;
