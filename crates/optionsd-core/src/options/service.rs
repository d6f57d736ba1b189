//! Option service: the in-memory option table and its write-through path
//!
//! The table is seeded from registered defaults, overlaid with persisted
//! values on load, and mutated only through [`OptionWriter::update_option`].
//! Updates are serialized by an async mutex so that precondition checks and
//! the commit that follows them see no interleaved writer.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{Mutex, MutexGuard};

use optionsd_types::option_adapter::OptionAdapter;

use crate::prelude::*;

use super::preconditions;
use super::types::{FrozenOptionRegistry, OptionEntry, OptionValue};

/// Key suffixes marking an option as secret. Matched case-sensitively.
pub const SENSITIVE_SUFFIXES: [&str; 3] = ["Token", "Secret", "Key"];

pub fn is_sensitive(key: &str) -> bool {
	SENSITIVE_SUFFIXES.iter().any(|suffix| key.ends_with(suffix))
}

/// Point-in-time copy of the option table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSnapshot {
	values: HashMap<String, OptionValue>,
}

impl OptionSnapshot {
	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.values.get(key)
	}
}

impl FromIterator<(String, OptionValue)> for OptionSnapshot {
	fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
		Self { values: iter.into_iter().collect() }
	}
}

/// Option service - owns the option table
pub struct OptionService {
	registry: Arc<FrozenOptionRegistry>,
	table: RwLock<HashMap<String, OptionValue>>,
	adapter: Arc<dyn OptionAdapter>,
	write_lock: Mutex<()>,
}

impl std::fmt::Debug for OptionService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("OptionService")
			.field("options", &self.table.read().len())
			.field("adapter", &self.adapter)
			.finish_non_exhaustive()
	}
}

impl OptionService {
	/// Create the service with every registered option at its default
	pub fn new(registry: Arc<FrozenOptionRegistry>, adapter: Arc<dyn OptionAdapter>) -> Self {
		let table =
			registry.list().map(|def| (def.key.clone(), def.default.clone())).collect::<HashMap<_, _>>();
		Self { registry, table: RwLock::new(table), adapter, write_lock: Mutex::new(()) }
	}

	/// Overlay persisted values onto the table
	///
	/// Rows for unknown keys are skipped, rows that no longer parse keep the
	/// current value. Returns the number of rows applied.
	pub async fn load(&self) -> ClResult<usize> {
		let _guard = self.write_lock.lock().await;
		let rows = self.adapter.list_options().await?;

		let mut parsed = Vec::with_capacity(rows.len());
		for row in rows {
			let Some(def) = self.registry.get(&row.key) else {
				debug!("Skipping unknown persisted option: {}", row.key);
				continue;
			};
			match def.parse(&row.value) {
				Ok(value) => parsed.push((def.key.clone(), value)),
				Err(err) => warn!("Ignoring persisted value of {}: {}", row.key, err),
			}
		}

		let applied = parsed.len();
		self.table.write().extend(parsed);
		debug!("Loaded {} persisted options", applied);
		Ok(applied)
	}

	pub fn get(&self, key: &str) -> Option<OptionValue> {
		self.table.read().get(key).cloned()
	}

	pub fn snapshot(&self) -> OptionSnapshot {
		OptionSnapshot { values: self.table.read().clone() }
	}

	/// All non-sensitive options with their text values, in table order
	pub fn list_public(&self) -> Vec<OptionEntry> {
		let table = self.table.read();
		table
			.iter()
			.filter(|(key, _)| !is_sensitive(key))
			.map(|(key, value)| OptionEntry { key: key.clone(), value: value.to_string() })
			.collect()
	}

	/// Start an update. Holds off every other update until dropped.
	pub async fn begin_update(&self) -> OptionWriter<'_> {
		OptionWriter { service: self, _guard: self.write_lock.lock().await }
	}

	/// Validate a proposed change against the precondition rules, then commit it
	///
	/// The snapshot used for the rules is taken under the update lock, so no
	/// other update can land between the check and the commit.
	pub async fn update(&self, key: &str, value: &str) -> ClResult<()> {
		let writer = self.begin_update().await;
		if let Err(err) = preconditions::check(key, value, &writer.snapshot()) {
			warn!("Rejected update of {}: {}", key, err);
			return Err(err);
		}
		writer.update_option(key, value).await?;
		Ok(())
	}
}

/// Exclusive update handle returned by [`OptionService::begin_update`]
pub struct OptionWriter<'a> {
	service: &'a OptionService,
	_guard: MutexGuard<'a, ()>,
}

impl OptionWriter<'_> {
	pub fn snapshot(&self) -> OptionSnapshot {
		self.service.snapshot()
	}

	/// Persist one option and apply it to the table
	///
	/// Parse, persist, then apply. Nothing changes if any step fails.
	pub async fn update_option(self, key: &str, raw: &str) -> ClResult<OptionValue> {
		let def = self
			.service
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown option: {}", key)))?;
		let value = def.parse(raw)?;

		self.service.adapter.update_option(key, &value.to_string()).await.inspect_err(|err| {
			warn!("Failed to persist option {}: {}", key, err);
		})?;

		self.service.table.write().insert(def.key.clone(), value.clone());
		info!("Option '{}' updated", key);
		Ok(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sensitive_suffixes() {
		assert!(is_sensitive("GitHubClientSecret"));
		assert!(is_sensitive("TelegramBotToken"));
		assert!(is_sensitive("TurnstileSiteKey"));
		assert!(is_sensitive("Key"));
		assert!(!is_sensitive("GitHubClientId"));
		assert!(!is_sensitive("TokenLimit"));
		assert!(!is_sensitive("SMTPtoken"));
		assert!(!is_sensitive("KeyRotationEnabled"));
	}
}

// vim: ts=4
