//! optionsd serves the runtime options of an application over HTTP.
//!
//! - `GET /api/option/` lists every option whose key does not look secret
//! - `PUT /api/option/` updates one option, refusing to switch a feature on
//!   while the settings it depends on are blank
//!
//! Options are typed, persisted through an [`OptionAdapter`], and held in an
//! in-memory table shared by all request handlers.
//!
//! [`OptionAdapter`]: optionsd_types::option_adapter::OptionAdapter

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod app;
pub mod prelude;
pub mod routes;
pub mod sync;

pub use app::AppBuilder;
pub use optionsd_core::app::{App, AppBuilderOpts, AppState};
pub use optionsd_core::options;
pub use optionsd_types::{error, option_adapter, types};

// vim: ts=4
