//! Display gate integration tests

use growth_diagnosis::gate::{
    AccessGate, GateState, MemorySessionStore, SessionStore, HUB_STORAGE_KEY, UNLOCKED_FLAG,
};

/// Unlock once, then a fresh gate in the same session opens straight away.
#[test]
fn test_round_trip_with_persisted_flag() {
    let mut session = MemorySessionStore::new();

    let mut gate = AccessGate::for_report("cava", "cava2026");
    assert_eq!(gate.state(), GateState::Loading);
    assert_eq!(gate.mount(&session), GateState::Locked);

    gate.set_input("cava2026");
    assert_eq!(gate.submit(&mut session), GateState::Unlocked);
    assert!(!gate.has_error());
    assert_eq!(session.get("gdt-auth-cava").as_deref(), Some(UNLOCKED_FLAG));

    let mut revisit = AccessGate::for_report("cava", "cava2026");
    assert_eq!(revisit.mount(&session), GateState::Unlocked);
}

#[test]
fn test_wrong_token_clears_input_without_lockout() {
    let mut session = MemorySessionStore::new();
    let mut gate = AccessGate::for_report("cava", "cava2026");
    gate.mount(&session);

    for attempt in ["", "cava", "cava2026 ", "Cava2026"] {
        gate.set_input(attempt);
        assert_eq!(gate.submit(&mut session), GateState::Locked);
        assert!(gate.has_error());
        assert_eq!(gate.input(), "");
    }
    assert!(session.get("gdt-auth-cava").is_none());

    gate.set_input("cava2026");
    assert_eq!(gate.submit(&mut session), GateState::Unlocked);
    assert!(!gate.has_error());
}

/// Unlocking one report leaves other reports and the hub locked.
#[test]
fn test_flags_are_per_key() {
    let mut session = MemorySessionStore::new();
    let mut cava = AccessGate::for_report("cava", "cava2026");
    cava.mount(&session);
    cava.set_input("cava2026");
    cava.submit(&mut session);

    let mut geico = AccessGate::for_report("geico", "geico2026");
    assert_eq!(geico.mount(&session), GateState::Locked);

    let mut hub = AccessGate::for_hub("gdt2026");
    assert_eq!(hub.storage_key(), HUB_STORAGE_KEY);
    assert_eq!(hub.mount(&session), GateState::Locked);
}

#[test]
fn test_unlocked_gate_ignores_further_submits() {
    let mut session = MemorySessionStore::new();
    session.set(HUB_STORAGE_KEY, UNLOCKED_FLAG);

    let mut hub = AccessGate::for_hub("gdt2026");
    assert_eq!(hub.mount(&session), GateState::Unlocked);
    hub.set_input("wrong");
    assert_eq!(hub.submit(&mut session), GateState::Unlocked);
    assert!(!hub.has_error());
}
