//! Pure domain logic for the outreach bulk-operation engine.
//!
//! This crate has no I/O and no async: it holds the error taxonomy, the
//! operation-envelope parser, the delimited-dataset row parser, and the
//! domain types shared by the engine and the API host. Everything that
//! touches a collaborator lives in `outreach-engine`.

pub mod dataset;
pub mod envelope;
pub mod error;
pub mod types;
