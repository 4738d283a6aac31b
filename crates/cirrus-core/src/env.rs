//! Process environment snapshot.
//!
//! Factories never read the process environment directly. The caller
//! captures a [`ProcessEnv`] once at startup and passes it into every
//! factory call, so two stacks assembled in one process see the same values.

use std::collections::HashMap;

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    vars: HashMap<String, String>,
}

impl ProcessEnv {
    /// Snapshot the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty snapshot (every lookup resolves to the empty string).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from explicit pairs (for tests and overrides).
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Resolve a variable. A name absent from the snapshot yields the empty
    /// string rather than an error.
    pub fn get(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_is_empty_string() {
        let env = ProcessEnv::empty();
        assert_eq!(env.get("NOT_SET"), "");
    }

    #[test]
    fn present_variable_resolves() {
        let env = ProcessEnv::from_vars([("API_KEY", "abc123")]);
        assert_eq!(env.get("API_KEY"), "abc123");
        assert_eq!(env.get("OTHER"), "");
    }
}
