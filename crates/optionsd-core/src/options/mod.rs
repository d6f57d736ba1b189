//! Runtime option subsystem
//!
//! - **Types** (`types.rs`): value model, definitions and registry
//! - **Service** (`service.rs`): option table, reader and updater
//! - **Preconditions** (`preconditions.rs`): rules gating feature toggles
//! - **Handler** (`handler.rs`): HTTP endpoints

pub mod handler;
pub mod preconditions;
pub mod service;
pub mod types;

pub use preconditions::{PreconditionRule, ENABLING_LITERAL, PRECONDITION_RULES};
pub use service::{is_sensitive, OptionService, OptionSnapshot, OptionWriter};
pub use types::{
	FrozenOptionRegistry, OptionDefinition, OptionDefinitionBuilder, OptionEntry, OptionKind,
	OptionRegistry, OptionValue,
};

// vim: ts=4
