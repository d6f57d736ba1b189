//! Common types used across optionsd: the API envelope and option rows.

use serde::{Deserialize, Serialize};

/// Response envelope for every API endpoint
///
/// Business failures keep the HTTP status at 200 and set `success` to false,
/// so clients always get a well-formed body with an explicit flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<T>,
}

impl<T> ApiResponse<T> {
	pub fn new(data: T) -> Self {
		Self { success: true, message: String::new(), data: Some(data) }
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self { success: false, message: message.into(), data: None }
	}
}

impl ApiResponse<()> {
	/// Success without a payload
	pub fn ok() -> Self {
		Self { success: true, message: String::new(), data: None }
	}
}

/// A persisted option row: key and its canonical text form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRow {
	pub key: Box<str>,
	pub value: Box<str>,
}

impl OptionRow {
	pub fn new(key: impl Into<Box<str>>, value: impl Into<Box<str>>) -> Self {
		Self { key: key.into(), value: value.into() }
	}
}


// vim: ts=4
