//! End-to-end booking lifecycle scenarios, exercised through the store and
//! the matching view together.

use squashpro_booking::domain::models::{
    BookingStatus, SkillFilter, SkillLevel, TargetSkill, OPEN_MATCH_LABEL,
};
use squashpro_booking::matching::{my_bookings, open_matches};
use squashpro_booking::store::{ActionOutcome, BookingDraft, BookingStore, MatchKind};

fn draft(host: &str, court: &str, date: &str, time: &str, kind: MatchKind) -> BookingDraft {
    BookingDraft {
        court_id: court.to_string(),
        host_id: host.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        kind,
        location: None,
    }
}

fn create(store: &mut BookingStore, draft: BookingDraft) -> String {
    let ticket = store.request_create(draft).unwrap();
    match store.confirm(ticket).unwrap() {
        ActionOutcome::Created(booking) => booking.id,
        other => panic!("expected Created, got {other:?}"),
    }
}

#[test]
fn open_match_lifecycle_from_listing_to_join() {
    let mut store = BookingStore::new();

    // Host H opens an Advanced slot at c1.
    let id = create(
        &mut store,
        draft(
            "H",
            "c1",
            "2024-11-15",
            "18:00",
            MatchKind::Open {
                target: TargetSkill::Advanced,
            },
        ),
    );

    // Visible to any other viewer under All and Advanced, hidden under
    // Beginner, and never joinable by the host themself.
    let visible_all = open_matches(store.bookings(), "G", SkillFilter::All);
    assert_eq!(visible_all.len(), 1);
    assert_eq!(visible_all[0].id, id);

    let visible_advanced = open_matches(
        store.bookings(),
        "G",
        SkillFilter::Level(SkillLevel::Advanced),
    );
    assert_eq!(visible_advanced.len(), 1);

    assert!(open_matches(
        store.bookings(),
        "G",
        SkillFilter::Level(SkillLevel::Beginner)
    )
    .is_empty());
    assert!(open_matches(store.bookings(), "H", SkillFilter::All).is_empty());

    // Guest G joins.
    let ticket = store.request_join(&id, "G").unwrap();
    store.confirm(ticket).unwrap();

    // Both parties now see it on their dashboards, and it is gone from every
    // find-match listing.
    assert_eq!(my_bookings(store.bookings(), "G").len(), 1);
    assert_eq!(my_bookings(store.bookings(), "H").len(), 1);
    for viewer in ["G", "H", "someone-else"] {
        assert!(open_matches(store.bookings(), viewer, SkillFilter::All).is_empty());
    }

    let settled = store.get(&id).unwrap();
    assert_eq!(settled.status, BookingStatus::Confirmed);
    assert_eq!(settled.guest_id.as_deref(), Some("G"));
}

#[test]
fn specific_opponent_booking_never_reaches_find_match() {
    let mut store = BookingStore::new();

    let id = create(
        &mut store,
        draft(
            "H",
            "c2",
            "2024-11-20",
            "19:00",
            MatchKind::Specific {
                opponent: Some("John Doe".to_string()),
            },
        ),
    );

    let booking = store.get(&id).unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.opponent_label, "John Doe");
    assert_eq!(booking.guest_id, None);

    for filter in [
        SkillFilter::All,
        SkillFilter::Level(SkillLevel::Beginner),
        SkillFilter::Level(SkillLevel::Pro),
    ] {
        assert!(open_matches(store.bookings(), "G", filter).is_empty());
    }
}

#[test]
fn host_cancel_clears_both_dashboards() {
    let mut store = BookingStore::new();

    let id = create(
        &mut store,
        draft(
            "H",
            "c1",
            "2024-11-15",
            "18:00",
            MatchKind::Open {
                target: TargetSkill::Any,
            },
        ),
    );
    let join = store.request_join(&id, "G").unwrap();
    store.confirm(join).unwrap();

    let cancel = store.request_cancel(&id, "H").unwrap();
    store.confirm(cancel).unwrap();

    assert!(my_bookings(store.bookings(), "H").is_empty());
    assert!(my_bookings(store.bookings(), "G").is_empty());
    assert!(open_matches(store.bookings(), "G", SkillFilter::All).is_empty());
}

#[test]
fn guest_leave_puts_the_slot_back_on_the_board() {
    let mut store = BookingStore::new();

    let id = create(
        &mut store,
        draft(
            "H",
            "c3",
            "2024-11-16",
            "10:00",
            MatchKind::Open {
                target: TargetSkill::Intermediate,
            },
        ),
    );
    let join = store.request_join(&id, "G").unwrap();
    store.confirm(join).unwrap();
    assert!(open_matches(store.bookings(), "X", SkillFilter::All).is_empty());

    let leave = store.request_cancel(&id, "G").unwrap();
    let outcome = store.confirm(leave).unwrap();
    assert!(matches!(outcome, ActionOutcome::Reopened(_)));

    // Back on the board with its original target, gone from the guest's
    // dashboard, still on the host's.
    let listed = open_matches(
        store.bookings(),
        "X",
        SkillFilter::Level(SkillLevel::Intermediate),
    );
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].opponent_label, OPEN_MATCH_LABEL);
    assert!(my_bookings(store.bookings(), "G").is_empty());
    assert_eq!(my_bookings(store.bookings(), "H").len(), 1);
}

#[test]
fn any_target_is_visible_under_every_filter() {
    let mut store = BookingStore::new();

    create(
        &mut store,
        draft(
            "H",
            "c1",
            "2024-12-01",
            "09:00",
            MatchKind::Open {
                target: TargetSkill::Any,
            },
        ),
    );

    for filter in [
        SkillFilter::All,
        SkillFilter::Level(SkillLevel::Beginner),
        SkillFilter::Level(SkillLevel::Intermediate),
        SkillFilter::Level(SkillLevel::Advanced),
        SkillFilter::Level(SkillLevel::Pro),
    ] {
        assert_eq!(open_matches(store.bookings(), "G", filter).len(), 1);
    }
}
