//! slicer-rs: host-agnostic date-range slicer engine.
//!
//! This crate provides a Rust-idiomatic API and a strict architectural split
//! for the range-reconciliation core behind a two-input date slicer: host
//! data snapshots in, `AdvancedFilter` directives out.

pub mod api;
pub mod core;
pub mod error;
pub mod host;
pub mod settings;
pub mod telemetry;

pub use api::{EngineSnapshot, InputSnapshot, SlicerEngine, SlicerEngineConfig};
pub use error::{SlicerError, SlicerResult};
