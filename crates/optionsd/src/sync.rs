//! Periodic reload of options from storage
//!
//! Lets several processes sharing one database converge on the latest
//! persisted values.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::prelude::*;

pub fn spawn_option_sync(app: App, interval: Duration) -> JoinHandle<()> {
	info!("Syncing options from storage every {:?}", interval);
	tokio::spawn(async move {
		let mut ticker = tokio::time::interval(interval);
		ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
		// The first tick fires immediately; the table was just loaded
		ticker.tick().await;
		loop {
			ticker.tick().await;
			match app.options.load().await {
				Ok(applied) => debug!("Option sync applied {} rows", applied),
				Err(e) => warn!("Option sync failed: {}", e),
			}
		}
	})
}

// vim: ts=4
