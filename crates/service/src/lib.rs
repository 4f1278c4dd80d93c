//! kudos-service: business rules and stateful views over the ledger store
//!
//! This crate provides:
//! - [`ReputationService`] — award/revoke semantics, self-award rejection,
//!   one-snapshot history reads, and the view factories
//! - [`SessionHandle`] / [`ManageSession`] — the moderator's bounded-lifetime
//!   editing session, serialized per session
//! - [`HistoryView`] — the read-only paginated history
//!
//! The command surface (platform transport, embeds, cooldowns, owner gating)
//! sits above this crate and consumes [`Page`] render data and typed errors.

mod error;
mod history;
mod service;
mod session;

pub use error::ServiceError;
pub use history::HistoryView;
pub use service::{History, ReputationService};
pub use session::{ManageSession, Page, SessionHandle};
