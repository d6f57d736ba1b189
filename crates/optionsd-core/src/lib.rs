//! Core of optionsd.
//!
//! Holds the typed option table, the registry of known options, the
//! precondition rules that gate feature toggles, and the axum handlers that
//! expose them.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod app;
pub mod extract;
pub mod known_options;
pub mod options;
pub mod prelude;

pub use app::{App, AppBuilderOpts, AppState};
pub use extract::JsonBody;

pub fn register_options(registry: &mut options::OptionRegistry) -> optionsd_types::error::ClResult<()> {
	known_options::register_options(registry)
}

// vim: ts=4
