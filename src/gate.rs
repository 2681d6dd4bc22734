//! Display gate
//!
//! A content-obscuring toggle, not an authentication mechanism: the token is
//! a plaintext string shipped with the page and the unlocked flag lives in
//! browser session storage. The state machine here is the same one the
//! rendered pages run in the browser (see `render::gate`).

use std::collections::HashMap;

/// Session storage key for the listing page
pub const HUB_STORAGE_KEY: &str = "gdt-hub-auth";

/// Value stored under a key once unlocked
pub const UNLOCKED_FLAG: &str = "true";

/// Session storage key for a report page
pub fn report_storage_key(report_id: &str) -> String {
    format!("gdt-auth-{}", report_id)
}

/// Session-scoped key/value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process stand-in for browser session storage
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Persisted flag not read yet
    Loading,
    /// Token entry form shown
    Locked,
    /// Protected content shown
    Unlocked,
}

/// One gate instance, owned by the page it protects
///
/// Reference model for the script emitted by `render::gate::wrap_in_gate`;
/// the two must keep the same transitions.
#[derive(Debug, Clone)]
pub struct AccessGate {
    storage_key: String,
    token: String,
    state: GateState,
    input: String,
    error: bool,
}

impl AccessGate {
    pub fn new(storage_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            token: token.into(),
            state: GateState::Loading,
            input: String::new(),
            error: false,
        }
    }

    pub fn for_report(report_id: &str, token: &str) -> Self {
        Self::new(report_storage_key(report_id), token)
    }

    pub fn for_hub(token: &str) -> Self {
        Self::new(HUB_STORAGE_KEY, token)
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the inline "incorrect" message is showing
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Read the persisted flag: `Loading -> Unlocked | Locked`
    pub fn mount(&mut self, store: &dyn SessionStore) -> GateState {
        if self.state == GateState::Loading {
            self.state = match store.get(&self.storage_key) {
                Some(flag) if flag == UNLOCKED_FLAG => GateState::Unlocked,
                _ => GateState::Locked,
            };
        }
        self.state
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Compare the current input against the token, case-sensitively.
    ///
    /// A match persists the flag and unlocks. A mismatch stays locked, shows
    /// the error and clears the input. There is no attempt limit.
    pub fn submit(&mut self, store: &mut dyn SessionStore) -> GateState {
        if self.state != GateState::Locked {
            return self.state;
        }
        if self.input == self.token {
            store.set(&self.storage_key, UNLOCKED_FLAG);
            self.state = GateState::Unlocked;
            self.error = false;
        } else {
            self.error = true;
            self.input.clear();
        }
        self.state
    }
}
