//! Schema-less payload model and slash-path navigation for the Relay SDK.
//!
//! Transport payloads arrive over the wire as untyped nested mappings.
//! This crate provides:
//! - [`PayloadValue`], the universal shape of anything reachable inside
//!   a payload (string | number | bool | null | sequence | mapping)
//! - slash-delimited path navigation ([`get_path`], [`path_exists`])
//!   that degrades to "not found" instead of failing on absent or
//!   unexpectedly shaped nodes
//! - [`Payload`], the owning read-only wrapper scoping navigation to
//!   one request's raw mapping
//!
//! No operation here mutates a payload; everything is a pure read.

#![deny(unsafe_code)]

pub mod path;
pub mod payload;

pub use path::{get_path, path_exists};
pub use payload::Payload;

/// The universal shape of any value reachable by path navigation.
///
/// Payloads carry no schema: any node may be absent or of unexpected
/// shape, and callers recover through defaults rather than errors.
pub type PayloadValue = serde_json::Value;
