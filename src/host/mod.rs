mod null_sink;

pub use null_sink::NullFilterSink;

use crate::core::filter::AdvancedFilter;
use crate::error::SlicerResult;

/// Contract implemented by any host filter boundary.
///
/// Sinks receive fully validated `AdvancedFilter` predicates, so host glue
/// stays isolated from reconciliation and selection logic.
pub trait FilterSink {
    /// Applies (or replaces) the slicer's filter on the host.
    fn apply(&mut self, filter: &AdvancedFilter) -> SlicerResult<()>;

    /// Removes the slicer's filter from the host.
    fn remove(&mut self) -> SlicerResult<()>;
}
