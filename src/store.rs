//! Environment store abstraction
//!
//! The registry never touches `std::env` directly. It goes through the
//! [`EnvStore`] trait so the backing store can be the real process
//! environment ([`ProcessEnv`]) or an isolated in-memory map
//! ([`MemoryEnv`]) for tests that must not observe each other's writes.

use std::collections::HashMap;

/// Key-value store of environment variables.
///
/// Implementations provide the OS process environment or an isolated
/// substitute. Values are plain strings; coercion happens in the registry.
pub trait EnvStore {
    /// Get a variable value. Returns `None` if the variable is not set.
    fn get(&self, name: &str) -> Option<String>;

    /// Set a variable. Last write per key wins.
    fn set(&mut self, name: &str, value: &str);
}

/// The real process environment backed by `std::env`.
///
/// Process-global and shared: writes are immediately visible to every
/// reader in the process, with no isolation. Tests using this store must
/// run serially.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a process environment handle.
    pub fn new() -> Self {
        Self
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) {
        std::env::set_var(name, value);
    }
}

/// An in-memory environment store.
///
/// Starts empty and shares nothing with the process environment, so each
/// test (or embedded use) gets a fully isolated variable space.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    vars: HashMap<String, String>,
}

impl MemoryEnv {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a variable, returning its previous value if it was set.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}
