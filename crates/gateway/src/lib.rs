//! HTTP client for the record-platform gateway.
//!
//! Implements the `outreach-engine` collaborator traits against the
//! platform's JSON API using [`reqwest`]. One [`RecordGateway`] instance is
//! shared across requests; it holds a pooled HTTP client, the base URL, and
//! an optional service API key.

mod client;
mod collaborators;

pub use client::{GatewayError, RecordGateway};
