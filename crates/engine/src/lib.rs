//! Workflow engine for the outreach bulk operations.
//!
//! The engine owns the pipeline: authorization gate, envelope dispatch, and
//! the two sub-workflows (templated send, bulk field update). Every external
//! system it talks to is behind an async trait in [`collaborators`], so the
//! whole pipeline is testable with in-memory fakes and the production
//! wiring lives in `outreach-gateway`.

pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod extract;
pub mod gate;
pub mod orchestrator;
pub mod sender;
pub mod update;

pub use config::EngineConfig;
pub use orchestrator::Engine;
