//! Environment maps for spawned commands.

use std::collections::BTreeMap;

/// Environment variables keyed by name.
pub type EnvMap = BTreeMap<String, String>;

/// The environment of the current process.
pub fn process_env() -> EnvMap {
  std::env::vars().collect()
}

/// Returns a copy of `env` with `key` set to `value`, replacing an existing
/// entry or adding a new one.
pub fn with_env(env: &EnvMap, key: &str, value: &str) -> EnvMap {
  let mut next = env.clone();
  next.insert(key.to_string(), value.to_string());
  next
}
