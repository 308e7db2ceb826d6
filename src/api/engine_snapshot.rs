use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DatasetBounds, FilterTarget, SelectionMode};
use crate::error::{SlicerError, SlicerResult};
use crate::host::FilterSink;

use super::SlicerEngine;

/// One date input as presented to the host: current value plus the allowed
/// pick range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub value: Option<NaiveDate>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// host diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub header_title: String,
    pub start_input: InputSnapshot,
    pub end_input: InputSnapshot,
    pub mode: SelectionMode,
    pub bounds: Option<DatasetBounds>,
    pub target: Option<FilterTarget>,
    pub update_cycles: u64,
    pub pushed_filters: u64,
    pub dropped_filters: u64,
}

impl<S: FilterSink> SlicerEngine<S> {
    /// Captures the externally observable engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let selection = self.core.model.selection;
        let constraints = self.input_constraints();
        EngineSnapshot {
            header_title: self.header_title(),
            start_input: InputSnapshot {
                value: selection.start,
                min: constraints.start_min,
                max: constraints.start_max,
            },
            end_input: InputSnapshot {
                value: selection.end,
                min: constraints.end_min,
                max: constraints.end_max,
            },
            mode: selection.mode,
            bounds: self.core.model.bounds,
            target: self.core.model.target.clone(),
            update_cycles: self.core.runtime.update_cycles,
            pushed_filters: self.core.runtime.pushed_filters,
            dropped_filters: self.core.runtime.dropped_filters,
        }
    }

    /// Serializes the snapshot to pretty JSON for debug tooling.
    pub fn snapshot_json_pretty(&self) -> SlicerResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SlicerError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
