mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod interaction_controller;
mod slicer_model;
mod slicer_presentation;
mod slicer_runtime;
mod update_controller;
mod validation;

pub use engine::SlicerEngine;
pub use engine_config::SlicerEngineConfig;
pub use engine_snapshot::{EngineSnapshot, InputSnapshot};
