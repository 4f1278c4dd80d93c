// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use kudos_core::{FakeClock, ValidationError};

const TIMEOUT: Duration = Duration::from_secs(120);

fn store_with_entries(target: u64, count: usize) -> Arc<LedgerStore> {
    let store = Arc::new(LedgerStore::open_in_memory().unwrap());
    store.ensure_schema().unwrap();
    for i in 0..count {
        let entry =
            NewEntry::direct(UserId(1000 + i as u64), UserId(target), 1, &format!("r{i}")).unwrap();
        store.insert(&entry).unwrap();
    }
    store
}

fn open(
    store: &Arc<LedgerStore>,
    target: u64,
    page_size: usize,
    clock: &FakeClock,
) -> ManageSession<FakeClock> {
    ManageSession::open(
        Arc::clone(store),
        UserId(99),
        UserId(target),
        page_size,
        TIMEOUT,
        clock.clone(),
    )
    .unwrap()
}

#[test]
fn open_fetches_initial_snapshot() {
    let store = store_with_entries(2, 7);
    let session = open(&store, 2, 5, &FakeClock::new());

    let page = session.page();
    assert_eq!(page.index, 0);
    assert_eq!(page.count, 2);
    assert_eq!(page.entries.len(), 5);
}

#[test]
fn navigation_clamps_at_both_ends() {
    let store = store_with_entries(2, 23);
    let mut session = open(&store, 2, 10, &FakeClock::new());

    assert_eq!(session.page().count, 3);

    // Three nexts from page 0 land on page 2, not a fourth page
    session.next().unwrap();
    session.next().unwrap();
    let page = session.next().unwrap();
    assert_eq!(page.index, 2);

    // Still a re-render, index unchanged
    let page = session.next().unwrap();
    assert_eq!(page.index, 2);

    session.prev().unwrap();
    session.prev().unwrap();
    let page = session.prev().unwrap();
    assert_eq!(page.index, 0);
    let page = session.prev().unwrap();
    assert_eq!(page.index, 0);
}

#[test]
fn controls_follow_page_position() {
    let store = store_with_entries(2, 23);
    let mut session = open(&store, 2, 10, &FakeClock::new());

    let page = session.page();
    assert!(!page.controls.prev_enabled);
    assert!(page.controls.next_enabled);

    let page = session.next().unwrap();
    assert!(page.controls.prev_enabled);
    assert!(page.controls.next_enabled);

    let page = session.next().unwrap();
    assert!(page.controls.prev_enabled);
    assert!(!page.controls.next_enabled);
}

#[test]
fn refresh_clamps_page_after_external_deletions() {
    let store = store_with_entries(2, 23);
    let mut session = open(&store, 2, 10, &FakeClock::new());
    session.next().unwrap();
    session.next().unwrap();
    assert_eq!(session.page().index, 2);

    // 15 of the 23 entries deleted out from under the session
    for entry in store.entries_for(UserId(2)).unwrap().iter().take(15) {
        store.delete_by_id(entry.id).unwrap();
    }

    let page = session.refresh().unwrap();
    assert_eq!(page.count, 1);
    assert_eq!(page.index, 0);
    assert_eq!(page.entries.len(), 8);
}

#[test]
fn add_entry_inserts_authored_by_moderator_and_refreshes() {
    let store = store_with_entries(2, 4);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    let page = session.add_entry("2", "-3", "manual correction").unwrap();
    assert_eq!(page.entries.len(), 5);

    let entries = store.entries_for(UserId(2)).unwrap();
    let added = entries.last().unwrap();
    assert_eq!(added.author, UserId(99));
    assert_eq!(added.points, -3);
    assert_eq!(added.reason, "manual correction");
}

#[test]
fn add_entry_may_target_a_different_member() {
    let store = store_with_entries(2, 1);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    session.add_entry("55", "+10", "migrated balance").unwrap();

    let entries = store.entries_for(UserId(55)).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].points, 10);
    // The session's own snapshot stays scoped to its target
    assert_eq!(session.page().entries.len(), 1);
}

#[test]
fn add_entry_rejects_malformed_points_without_touching_anything() {
    let store = store_with_entries(2, 3);
    let mut session = open(&store, 2, 5, &FakeClock::new());
    let before = session.page();

    let err = session.add_entry("2", "abc", "reason").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidPointValue(_))
    ));

    assert_eq!(store.entries_for(UserId(2)).unwrap().len(), 3);
    assert_eq!(session.page(), before);
}

#[test]
fn add_entry_rejects_malformed_target() {
    let store = store_with_entries(2, 0);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    let err = session.add_entry("not-a-user", "1", "reason").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidUserId(_))
    ));
}

#[test]
fn add_entry_rejects_empty_reason() {
    let store = store_with_entries(2, 0);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    let err = session.add_entry("2", "1", "   ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::EmptyReason)
    ));
    assert!(store.entries_for(UserId(2)).unwrap().is_empty());
}

#[test]
fn delete_entry_removes_row_and_refreshes() {
    let store = store_with_entries(2, 6);
    let mut session = open(&store, 2, 5, &FakeClock::new());
    let victim = store.entries_for(UserId(2)).unwrap()[0].id;

    let page = session.delete_entry(&victim.to_string()).unwrap();
    assert_eq!(page.entries.len(), 5);
    assert_eq!(store.entries_for(UserId(2)).unwrap().len(), 5);
}

#[test]
fn delete_entry_with_missing_id_still_refreshes() {
    let store = store_with_entries(2, 2);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    let page = session.delete_entry("424242").unwrap();
    assert_eq!(page.entries.len(), 2);
}

#[test]
fn delete_entry_rejects_non_numeric_id() {
    let store = store_with_entries(2, 2);
    let mut session = open(&store, 2, 5, &FakeClock::new());

    let err = session.delete_entry("first").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidEntryId(_))
    ));
    assert_eq!(store.entries_for(UserId(2)).unwrap().len(), 2);
}

#[test]
fn session_expires_after_inactivity() {
    let clock = FakeClock::new();
    let store = store_with_entries(2, 3);
    let mut session = open(&store, 2, 5, &clock);

    clock.advance(TIMEOUT + Duration::from_secs(1));

    assert!(matches!(
        session.next().unwrap_err(),
        ServiceError::SessionExpired
    ));
    // Terminal: every further operation fails fast
    assert!(matches!(
        session.refresh().unwrap_err(),
        ServiceError::SessionExpired
    ));
}

#[test]
fn expired_session_never_touches_the_store() {
    let clock = FakeClock::new();
    let store = store_with_entries(2, 1);
    let mut session = open(&store, 2, 5, &clock);

    clock.advance(TIMEOUT + Duration::from_secs(1));

    assert!(session.add_entry("2", "1", "late").is_err());
    assert!(session.delete_entry("1").is_err());
    assert_eq!(store.entries_for(UserId(2)).unwrap().len(), 1);
}

#[test]
fn activity_pushes_the_deadline_out() {
    let clock = FakeClock::new();
    let store = store_with_entries(2, 23);
    let mut session = open(&store, 2, 10, &clock);

    // Each operation lands inside the window and resets it
    clock.advance(Duration::from_secs(100));
    session.next().unwrap();
    clock.advance(Duration::from_secs(100));
    session.next().unwrap();
    clock.advance(Duration::from_secs(100));
    assert_eq!(session.refresh().unwrap().index, 2);
}

#[test]
fn handle_serializes_concurrent_operations() {
    let store = store_with_entries(2, 40);
    let clock = FakeClock::new();
    let handle = SessionHandle::new(open(&store, 2, 5, &clock));

    let mut workers = Vec::new();
    for _ in 0..4 {
        let handle = handle.clone();
        workers.push(std::thread::spawn(move || {
            for _ in 0..25 {
                handle.next().unwrap();
                handle.refresh().unwrap();
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    let page = handle.page();
    assert!(page.index < page.count);
    assert_eq!(page.count, 8);
}

#[test]
fn page_serializes_for_rendering() {
    let store = store_with_entries(2, 2);
    let session = open(&store, 2, 5, &FakeClock::new());

    let json = serde_json::to_value(session.page()).unwrap();
    assert_eq!(json["index"], 0);
    assert_eq!(json["count"], 1);
    assert_eq!(json["controls"]["prev_enabled"], false);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
}
