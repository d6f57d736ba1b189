//! Storage adapter for runtime options
//!
//! Implementations persist options as plain key/value text. Typing and
//! validation happen above this layer.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::OptionRow;

#[async_trait]
pub trait OptionAdapter: Debug + Send + Sync {
	/// List every persisted option
	async fn list_options(&self) -> ClResult<Vec<OptionRow>>;

	/// Read a single option, `None` if it was never persisted
	async fn read_option(&self, key: &str) -> ClResult<Option<Box<str>>>;

	/// Insert or replace an option
	///
	/// Errors carry the storage layer's own message, which is shown to the
	/// client as is.
	async fn update_option(&self, key: &str, value: &str) -> ClResult<()>;
}

// vim: ts=4
