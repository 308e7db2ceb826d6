use tracing::{debug, trace};

use crate::core::snapshot::DataSnapshot;
use crate::core::{reconcile, FilterDirective};
use crate::error::SlicerResult;
use crate::host::FilterSink;

use super::SlicerEngine;

impl<S: FilterSink> SlicerEngine<S> {
    /// Ingests one host data refresh.
    ///
    /// Derives bounds, target, display name and defaults from the snapshot,
    /// reconciles them against the held selection, and forwards the
    /// resulting directive to the sink. Category-less snapshots still
    /// refresh the derived state (to nothing), so a removed field binding
    /// clears bounds and target instead of leaving them stale.
    pub fn update(&mut self, snapshot: &DataSnapshot) -> SlicerResult<FilterDirective> {
        self.core.runtime.update_cycles += 1;

        let defaults = snapshot.measure_defaults();
        let restored = snapshot.restored_range();
        self.core.model.bounds = snapshot.dataset_bounds();
        self.core.model.target = snapshot.filter_target();
        self.core.model.field_display_name =
            snapshot.category_display_name().map(str::to_owned);
        self.core.model.latest_defaults = defaults;

        debug!(
            cycle = self.core.runtime.update_cycles,
            has_bounds = self.core.model.bounds.is_some(),
            has_target = self.core.model.target.is_some(),
            has_restored = restored.is_some(),
            defaults_available = defaults.is_available(),
            "ingest snapshot"
        );

        let decision = reconcile::ingest(
            &mut self.core.model.selection,
            self.core.model.bounds.as_ref(),
            &defaults,
            restored.as_ref(),
        );
        trace!(
            decision = ?decision,
            mode = ?self.core.model.selection.mode,
            start = ?self.core.model.selection.start,
            end = ?self.core.model.selection.end,
            "reconciled snapshot"
        );
        self.resolve_and_forward(decision)
    }
}
