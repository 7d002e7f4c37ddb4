use super::*;

// =============================================================
// Queueing
// =============================================================

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = NoticesState::default();
    let first = state.push_success("criado".to_owned());
    let second = state.push_error("falhou".to_owned());
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_keeps_insertion_order() {
    let mut state = NoticesState::default();
    state.push_success("primeiro".to_owned());
    state.push_error("segundo".to_owned());
    assert_eq!(state.items[0].text, "primeiro");
    assert_eq!(state.items[0].kind, NoticeKind::Success);
    assert_eq!(state.items[1].text, "segundo");
    assert_eq!(state.items[1].kind, NoticeKind::Error);
}

#[test]
fn ids_stay_unique_after_dismissal() {
    let mut state = NoticesState::default();
    let first = state.push_success("a".to_owned());
    state.dismiss(first);
    let second = state.push_success("b".to_owned());
    assert_ne!(first, second);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn dismiss_removes_only_the_matching_notice() {
    let mut state = NoticesState::default();
    let first = state.push_success("a".to_owned());
    let second = state.push_success("b".to_owned());
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_of_unknown_id_is_noop() {
    let mut state = NoticesState::default();
    state.push_success("a".to_owned());
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn tick_ages_notices_until_ttl() {
    let mut state = NoticesState::default();
    state.push_success("a".to_owned());
    for _ in 0..NoticesState::TTL_TICKS - 1 {
        state.tick();
    }
    assert_eq!(state.items.len(), 1);
    state.tick();
    assert!(state.items.is_empty());
}

#[test]
fn tick_expires_notices_independently() {
    let mut state = NoticesState::default();
    state.push_success("velho".to_owned());
    for _ in 0..3 {
        state.tick();
    }
    state.push_success("novo".to_owned());
    for _ in 0..3 {
        state.tick();
    }
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "novo");
}

#[test]
fn tick_on_empty_queue_is_noop() {
    let mut state = NoticesState::default();
    state.tick();
    assert!(state.items.is_empty());
}
