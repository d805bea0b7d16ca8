//! Shared utilities.
//!
//! Environment helpers for spawned commands and test helpers.

pub mod env;

#[cfg(test)]
pub mod testutil;
