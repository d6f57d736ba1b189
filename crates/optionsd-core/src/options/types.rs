//! Option types and definitions
//!
//! Values travel as text over HTTP and in storage, but live in the table as a
//! tagged [`OptionValue`] parsed according to each option's declared kind.

use std::collections::HashMap;
use std::fmt::{self, Debug};

use serde::Serialize;

use crate::prelude::*;

/// Type alias for option validator function
pub type OptionValidator = Box<dyn Fn(&OptionValue) -> ClResult<()> + Send + Sync>;

/// Declared type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
	Bool,
	Int,
	Float,
	/// Comma-separated on the wire
	StringList,
	String,
}

impl OptionKind {
	/// Value used when an option has no explicit default
	pub fn empty_value(self) -> OptionValue {
		match self {
			OptionKind::Bool => OptionValue::Bool(false),
			OptionKind::Int => OptionValue::Int(0),
			OptionKind::Float => OptionValue::Float(0.0),
			OptionKind::StringList => OptionValue::StringList(Vec::new()),
			OptionKind::String => OptionValue::String(String::new()),
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			OptionKind::Bool => "bool",
			OptionKind::Int => "int",
			OptionKind::Float => "float",
			OptionKind::StringList => "list",
			OptionKind::String => "string",
		}
	}
}

/// Option value
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
	Bool(bool),
	Int(i64),
	Float(f64),
	StringList(Vec<String>),
	String(String),
}

impl OptionValue {
	/// Parse the text form of a value of the given kind
	pub fn parse(kind: OptionKind, raw: &str) -> ClResult<OptionValue> {
		match kind {
			OptionKind::Bool => match raw {
				"true" => Ok(OptionValue::Bool(true)),
				"false" => Ok(OptionValue::Bool(false)),
				_ => Err(Error::ValidationError(format!(
					"expected \"true\" or \"false\", got \"{}\"",
					raw
				))),
			},
			OptionKind::Int => raw
				.trim()
				.parse::<i64>()
				.map(OptionValue::Int)
				.map_err(|_| Error::ValidationError(format!("expected an integer, got \"{}\"", raw))),
			OptionKind::Float => match raw.trim().parse::<f64>() {
				Ok(f) if f.is_finite() => Ok(OptionValue::Float(f)),
				_ => Err(Error::ValidationError(format!("expected a number, got \"{}\"", raw))),
			},
			OptionKind::StringList => Ok(OptionValue::StringList(
				raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect(),
			)),
			OptionKind::String => Ok(OptionValue::String(raw.to_string())),
		}
	}

	pub fn kind(&self) -> OptionKind {
		match self {
			OptionValue::Bool(_) => OptionKind::Bool,
			OptionValue::Int(_) => OptionKind::Int,
			OptionValue::Float(_) => OptionKind::Float,
			OptionValue::StringList(_) => OptionKind::StringList,
			OptionValue::String(_) => OptionKind::String,
		}
	}

	/// Empty text or an empty list. Scalars are never blank.
	pub fn is_blank(&self) -> bool {
		match self {
			OptionValue::String(s) => s.is_empty(),
			OptionValue::StringList(items) => items.is_empty(),
			OptionValue::Bool(_) | OptionValue::Int(_) | OptionValue::Float(_) => false,
		}
	}
}

impl fmt::Display for OptionValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OptionValue::Bool(b) => write!(f, "{}", b),
			OptionValue::Int(i) => write!(f, "{}", i),
			OptionValue::Float(x) => write!(f, "{}", x),
			OptionValue::StringList(items) => write!(f, "{}", items.join(",")),
			OptionValue::String(s) => f.write_str(s),
		}
	}
}

/// A key with its text value, as returned by the read endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
	pub key: String,
	pub value: String,
}

/// Option definition - metadata for each known option
pub struct OptionDefinition {
	pub key: String,
	pub description: String,
	pub kind: OptionKind,
	pub default: OptionValue,
	pub validator: Option<OptionValidator>,
}

impl Debug for OptionDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OptionDefinition")
			.field("key", &self.key)
			.field("description", &self.description)
			.field("kind", &self.kind)
			.field("default", &self.default)
			.field("validator", &self.validator.is_some())
			.finish()
	}
}

impl OptionDefinition {
	pub fn builder(key: impl Into<String>, kind: OptionKind) -> OptionDefinitionBuilder {
		OptionDefinitionBuilder::new(key, kind)
	}

	/// Parse and validate a proposed text value for this option
	pub fn parse(&self, raw: &str) -> ClResult<OptionValue> {
		let value = OptionValue::parse(self.kind, raw)
			.map_err(|e| Error::ValidationError(format!("Invalid value for {}: {}", self.key, e)))?;
		if let Some(validator) = &self.validator {
			validator(&value)?;
		}
		Ok(value)
	}
}

/// Builder for OptionDefinition
pub struct OptionDefinitionBuilder {
	key: String,
	kind: OptionKind,
	description: Option<String>,
	default: Option<OptionValue>,
	validator: Option<OptionValidator>,
}

impl OptionDefinitionBuilder {
	pub fn new(key: impl Into<String>, kind: OptionKind) -> Self {
		Self { key: key.into(), kind, description: None, default: None, validator: None }
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the default value. Without one the kind's empty value is used.
	pub fn default(mut self, value: OptionValue) -> Self {
		self.default = Some(value);
		self
	}

	pub fn validator<F>(mut self, f: F) -> Self
	where
		F: Fn(&OptionValue) -> ClResult<()> + Send + Sync + 'static,
	{
		self.validator = Some(Box::new(f));
		self
	}

	pub fn build(self) -> ClResult<OptionDefinition> {
		let description = self.description.ok_or_else(|| {
			Error::ConfigError(format!("Option '{}' has no description", self.key))
		})?;

		let default = self.default.unwrap_or_else(|| self.kind.empty_value());
		if default.kind() != self.kind {
			return Err(Error::ConfigError(format!(
				"Default of option '{}' is {}, expected {}",
				self.key,
				default.kind().name(),
				self.kind.name()
			)));
		}

		Ok(OptionDefinition {
			key: self.key,
			description,
			kind: self.kind,
			default,
			validator: self.validator,
		})
	}
}

/// Mutable registry used during app initialization
#[derive(Debug, Default)]
pub struct OptionRegistry {
	definitions: HashMap<String, OptionDefinition>,
}

impl OptionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register(&mut self, def: OptionDefinition) -> ClResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Option '{}' is already registered", def.key)));
		}

		debug!("Registering option: {}", def.key);
		self.definitions.insert(def.key.clone(), def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenOptionRegistry {
		info!("Freezing option registry with {} definitions", self.definitions.len());
		FrozenOptionRegistry { definitions: self.definitions }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable registry stored in AppState
#[derive(Debug)]
pub struct FrozenOptionRegistry {
	definitions: HashMap<String, OptionDefinition>,
}

impl FrozenOptionRegistry {
	pub fn get(&self, key: &str) -> Option<&OptionDefinition> {
		self.definitions.get(key)
	}

	pub fn list(&self) -> impl Iterator<Item = &OptionDefinition> {
		self.definitions.values()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
