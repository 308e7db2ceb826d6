use crate::core::{DatasetBounds, FilterTarget, MeasureDefaults, SelectionState};

/// Slicer domain state grouped for the public facade.
///
/// Everything except `selection` is a per-snapshot derivation: bounds,
/// target, display name and defaults are replaced wholesale on every
/// `update` so they can never go stale against the host's data.
#[derive(Debug, Default)]
pub struct SlicerModel {
    pub(super) selection: SelectionState,
    pub(super) bounds: Option<DatasetBounds>,
    pub(super) target: Option<FilterTarget>,
    pub(super) field_display_name: Option<String>,
    /// Defaults derived from the latest snapshot, kept for `reset`.
    pub(super) latest_defaults: MeasureDefaults,
}
