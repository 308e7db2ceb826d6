/// Engine lifecycle counters surfaced through snapshots and accessors.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlicerRuntimeState {
    pub(super) update_cycles: u64,
    pub(super) pushed_filters: u64,
    pub(super) dropped_filters: u64,
}
