use crate::core::filter::AdvancedFilter;
use crate::error::SlicerResult;
use crate::host::FilterSink;

/// No-op sink used by tests and headless engine usage.
///
/// It still serializes every applied filter so tests can catch wire-shape
/// regressions before a real host boundary is introduced.
#[derive(Debug, Default)]
pub struct NullFilterSink {
    pub apply_count: usize,
    pub remove_count: usize,
    pub last_applied: Option<AdvancedFilter>,
}

impl FilterSink for NullFilterSink {
    fn apply(&mut self, filter: &AdvancedFilter) -> SlicerResult<()> {
        filter.to_json()?;
        self.apply_count += 1;
        self.last_applied = Some(filter.clone());
        Ok(())
    }

    fn remove(&mut self) -> SlicerResult<()> {
        self.remove_count += 1;
        self.last_applied = None;
        Ok(())
    }
}
