//! Command line front end for crossmake suites.
//!
//! Build scripts that assemble their own [`Suite`](crossmake_lib::Suite) can
//! hand it to [`app::run`] to get the same `build`, `clean` and `platforms`
//! commands as the `crossmake` binary.

pub mod app;
pub mod cmd;
pub mod config;
pub mod output;
