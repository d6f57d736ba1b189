//! App builder - constructs and runs the optionsd application

use std::sync::Arc;
use std::time::Duration;

use optionsd_core::app::{AppBuilderOpts, AppState, VERSION};
use optionsd_core::options::{OptionRegistry, OptionService};
use optionsd_types::option_adapter::OptionAdapter;

use crate::prelude::*;
use crate::{routes, sync};

pub struct AppBuilder {
	opts: AppBuilderOpts,
	option_adapter: Option<Arc<dyn OptionAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// Ignore the error: a subscriber may already be set (tests, embedding)
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder { opts: AppBuilderOpts::default(), option_adapter: None }
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn sync_interval(&mut self, interval: Option<Duration>) -> &mut Self {
		self.opts.sync_interval = interval.filter(|d| !d.is_zero());
		self
	}

	// Adapters
	pub fn option_adapter(&mut self, option_adapter: Arc<dyn OptionAdapter>) -> &mut Self {
		self.option_adapter = Some(option_adapter);
		self
	}

	/// Assemble the app state: register options, load persisted values
	pub async fn build(self) -> ClResult<App> {
		let Some(option_adapter) = self.option_adapter else {
			error!("FATAL: No option adapter configured");
			return Err(Error::Internal("No option adapter configured".to_string()));
		};

		let mut option_registry = OptionRegistry::new();
		optionsd_core::register_options(&mut option_registry)?;
		info!("Registered {} options", option_registry.len());

		let option_registry = Arc::new(option_registry.freeze());
		let options = Arc::new(OptionService::new(option_registry, option_adapter.clone()));
		let applied = options.load().await?;
		info!("Option table initialized, {} persisted values applied", applied);

		Ok(Arc::new(AppState { opts: self.opts, option_adapter, options }))
	}

	pub async fn run(self) -> ClResult<()> {
		info!("optionsd V{}", VERSION);

		let app = self.build().await?;
		let router = routes::init(app.clone());

		if let Some(interval) = app.opts.sync_interval {
			sync::spawn_option_sync(app.clone(), interval);
		}

		let listener = tokio::net::TcpListener::bind(&*app.opts.listen).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			Error::Io(e)
		})?;
		info!("Listening on {}", app.opts.listen);

		axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
		info!("Shutting down");
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		warn!("Cannot listen for shutdown signal: {}", e);
		std::future::pending::<()>().await;
	}
}

// vim: ts=4
