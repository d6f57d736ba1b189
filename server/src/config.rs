//! Environment configuration

use std::{env, path, time::Duration};

use optionsd::error::{ClResult, Error};

pub struct Config {
	/// `LISTEN`, address to bind
	pub listen: String,
	/// `DB_DIR`, directory holding `options.db`
	pub db_dir: path::PathBuf,
	/// `SYNC_FREQUENCY`, seconds between reloads from storage. 0 disables.
	pub sync_interval: Option<Duration>,
}

impl Config {
	pub fn from_env() -> ClResult<Self> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClResult<Self> {
		let sync_interval = match lookup("SYNC_FREQUENCY") {
			Some(s) if !s.trim().is_empty() => {
				let secs = s.trim().parse::<u64>().map_err(|_| {
					Error::ConfigError(format!("SYNC_FREQUENCY must be a number of seconds, got {:?}", s))
				})?;
				(secs > 0).then(|| Duration::from_secs(secs))
			}
			_ => None,
		};

		Ok(Config {
			listen: lookup("LISTEN").unwrap_or_else(|| "127.0.0.1:3000".to_string()),
			db_dir: path::PathBuf::from(lookup("DB_DIR").unwrap_or_else(|| "./data".to_string())),
			sync_interval,
		})
	}

	pub fn db_path(&self) -> path::PathBuf {
		self.db_dir.join("options.db")
	}
}


// vim: ts=4
