//! App state type

use std::sync::Arc;
use std::time::Duration;

use optionsd_types::option_adapter::OptionAdapter;

use crate::options::OptionService;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,
	pub option_adapter: Arc<dyn OptionAdapter>,

	// Option subsystem
	pub options: Arc<OptionService>,
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	/// Reload options from storage on this interval. `None` disables sync.
	pub sync_interval: Option<Duration>,
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		Self { listen: "127.0.0.1:3000".into(), sync_interval: None }
	}
}

// vim: ts=4
