use crate::core::{AdvancedFilter, EmitDecision, FilterDirective};
use crate::error::SlicerResult;
use crate::host::FilterSink;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `SlicerEngine` coordinates snapshot ingestion, the range reconciliation
/// state machine, the formatting model, and filter directives pushed to
/// the host sink.
pub struct SlicerEngine<S: FilterSink> {
    pub(super) sink: S,
    pub(super) core: EngineCore,
}

impl<S: FilterSink> SlicerEngine<S> {
    /// Maps a reconciliation decision onto the host filter boundary and
    /// forwards it.
    ///
    /// Without a filter target every decision degrades to `Keep`: local
    /// state still advances, filtering waits for a field binding. Pushing
    /// an empty selection removes the filter instead of applying an empty
    /// predicate.
    pub(super) fn resolve_and_forward(
        &mut self,
        decision: EmitDecision,
    ) -> SlicerResult<FilterDirective> {
        let directive = match decision {
            EmitDecision::Hold => FilterDirective::Keep,
            EmitDecision::Drop => match &self.core.model.target {
                Some(_) => FilterDirective::Remove,
                None => FilterDirective::Keep,
            },
            EmitDecision::Push => match &self.core.model.target {
                None => FilterDirective::Keep,
                Some(target) => {
                    match AdvancedFilter::from_selection(target, &self.core.model.selection) {
                        Some(filter) => FilterDirective::Apply(filter),
                        None => FilterDirective::Remove,
                    }
                }
            },
        };
        match &directive {
            FilterDirective::Apply(filter) => {
                self.sink.apply(filter)?;
                self.core.runtime.pushed_filters += 1;
            }
            FilterDirective::Remove => {
                self.sink.remove()?;
                self.core.runtime.dropped_filters += 1;
            }
            FilterDirective::Keep => {}
        }
        Ok(directive)
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
