//! Shared helpers for option service tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use optionsd_core::options::{OptionRegistry, OptionService};
use optionsd_types::error::{ClResult, Error};
use optionsd_types::option_adapter::OptionAdapter;
use optionsd_types::types::OptionRow;

/// In-memory adapter that can be told to fail writes
#[derive(Debug, Default)]
pub struct MemoryOptionAdapter {
	rows: Mutex<HashMap<String, String>>,
	fail_writes: AtomicBool,
	writes: AtomicUsize,
}

impl MemoryOptionAdapter {
	pub fn with_rows(rows: &[(&str, &str)]) -> Self {
		let adapter = Self::default();
		adapter.rows.lock().extend(rows.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
		adapter
	}

	pub fn fail_writes(&self, fail: bool) {
		self.fail_writes.store(fail, Ordering::SeqCst);
	}

	pub fn writes(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	pub fn stored(&self, key: &str) -> Option<String> {
		self.rows.lock().get(key).cloned()
	}

	pub fn put(&self, key: &str, value: &str) {
		self.rows.lock().insert(key.to_string(), value.to_string());
	}
}

#[async_trait]
impl OptionAdapter for MemoryOptionAdapter {
	async fn list_options(&self) -> ClResult<Vec<OptionRow>> {
		Ok(self.rows.lock().iter().map(|(k, v)| OptionRow::new(k.as_str(), v.as_str())).collect())
	}

	async fn read_option(&self, key: &str) -> ClResult<Option<Box<str>>> {
		Ok(self.rows.lock().get(key).map(|v| v.as_str().into()))
	}

	async fn update_option(&self, key: &str, value: &str) -> ClResult<()> {
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::DbError("database is locked".into()));
		}
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.rows.lock().insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Service over the full known option set, loaded from `adapter`
pub async fn create_test_service(adapter: Arc<MemoryOptionAdapter>) -> OptionService {
	let mut registry = OptionRegistry::new();
	optionsd_core::register_options(&mut registry).expect("Failed to register options");
	let service = OptionService::new(Arc::new(registry.freeze()), adapter);
	service.load().await.expect("Failed to load options");
	service
}

// vim: ts=4
