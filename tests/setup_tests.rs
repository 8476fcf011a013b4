//! Setup phase and the Setup → Rounds transition.

use sushi_tally::{
    can_add_draft, can_remove_draft, GameError, Phase, PlayerDraft, PlayerId, Session,
};

/// Starting with a mix of named and unnamed candidates keeps exactly the
/// named ones, in order.
#[test]
fn test_start_filters_to_named_candidates() {
    let mut session = Session::with_seed(42);
    session
        .start(vec![
            PlayerDraft::named("A"),
            PlayerDraft::unnamed(),
            PlayerDraft::named("B"),
        ])
        .unwrap();

    assert_eq!(session.phase(), Phase::Rounds);
    let names: Vec<_> = session.players().iter().map(|view| view.name()).collect();
    assert_eq!(names, ["A", "B"]);
}

/// One named candidate is not enough, and the failed attempt must not be
/// partially applied.
#[test]
fn test_start_with_one_named_candidate_fails_cleanly() {
    let mut session = Session::with_seed(42);
    let candidates = vec![PlayerDraft::named("A"), PlayerDraft::unnamed()];

    assert!(!Session::can_start(&candidates));
    let err = session.start(candidates).unwrap_err();
    assert_eq!(err, GameError::NotEnoughNamedPlayers(1));

    assert_eq!(session.phase(), Phase::Setup);
    assert!(session.players().is_empty());
    assert_eq!(session.quota(), None);
    assert!(!session.all_ready());
}

/// Each supported roster size gets its quota; everything else fails loudly.
#[test]
fn test_quota_follows_roster_size() {
    for (count, quota) in [(2, 10), (3, 9), (4, 8), (5, 7)] {
        let mut session = Session::with_seed(42);
        let candidates: Vec<_> = (0..count)
            .map(|i| PlayerDraft::named(format!("P{i}")))
            .collect();
        session.start(candidates).unwrap();
        assert_eq!(session.quota(), Some(quota));
    }

    let mut session = Session::with_seed(42);
    let too_many: Vec<_> = (0..6).map(|i| PlayerDraft::named(format!("P{i}"))).collect();
    let err = session.start(too_many).unwrap_err();
    assert_eq!(err, GameError::UnsupportedPlayerCount(6));
    assert_eq!(session.phase(), Phase::Setup);
}

/// Promoted players start with an empty hand, no focus, and fresh ids in
/// submission order.
#[test]
fn test_promoted_roster_is_seeded_empty() {
    let mut session = Session::with_seed(42);
    session
        .start(vec![
            PlayerDraft::named("A"),
            PlayerDraft::named("B"),
            PlayerDraft::named("C"),
        ])
        .unwrap();

    for (index, view) in session.players().iter().enumerate() {
        assert_eq!(view.id(), PlayerId::new(index as u8));
        assert_eq!(view.card_count(), 0);
        assert_eq!(view.focus(), None);
        assert!(!view.is_ready());
    }
    assert!(!session.all_ready());
}

/// The setup form grows between two and five slots.
#[test]
fn test_draft_slot_bounds() {
    let mut form = vec![PlayerDraft::unnamed(), PlayerDraft::unnamed()];
    assert!(!can_remove_draft(&form));

    while can_add_draft(&form) {
        form.push(PlayerDraft::unnamed());
    }
    assert_eq!(form.len(), 5);
    assert!(can_remove_draft(&form));
}
