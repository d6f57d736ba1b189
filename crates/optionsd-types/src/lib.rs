//! Shared types, the storage adapter trait, and the error type for optionsd.
//!
//! This crate holds what both the core crate and the storage adapters need, so
//! adapters compile without pulling in the HTTP layer.

pub mod error;
pub mod option_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
