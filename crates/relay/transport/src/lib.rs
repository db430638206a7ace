//! Read-side Transport views for the Relay SDK.
//!
//! A Transport is the per-request aggregate exchanged between gateway
//! and worker nodes: request metadata, an optional download body, data
//! produced by each service, relation/link graphs, inter-service call
//! records, transactions, and errors accumulated as the request
//! traverses the pipeline.
//!
//! This crate exposes [`Transport`], a read-only domain view over one
//! such payload. Every accessor is a pure lookup: absence anywhere in
//! the structure degrades to a default or an empty container, never an
//! error. The single exception is the property-default precondition
//! ([`TransportError::NonStringPropertyDefault`]).

#![deny(unsafe_code)]

pub mod error;
pub mod file;
pub mod transport;

pub use error::TransportError;
pub use file::File;
pub use transport::Transport;
