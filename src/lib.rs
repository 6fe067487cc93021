//! Translate text between languages through a hosted translation API.
//!
//! The library holds the language table, the provider client and the
//! search feature; the `quick-translate` binary wires them to a terminal.

pub mod cli;
pub mod config;
pub mod i18n;
pub mod search;
pub mod translation;
