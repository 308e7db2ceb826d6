use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::{reconcile, EditedField, FilterDirective};
use crate::error::SlicerResult;
use crate::host::FilterSink;

use super::SlicerEngine;

impl<S: FilterSink> SlicerEngine<S> {
    /// Applies a user edit of the start input.
    ///
    /// `None` clears the field. An edit always produces a directive, even
    /// when auto-correction lands the range back where it was.
    pub fn edit_start_date(&mut self, value: Option<NaiveDate>) -> SlicerResult<FilterDirective> {
        self.edit_date(EditedField::Start, value)
    }

    /// Applies a user edit of the end input.
    pub fn edit_end_date(&mut self, value: Option<NaiveDate>) -> SlicerResult<FilterDirective> {
        self.edit_date(EditedField::End, value)
    }

    fn edit_date(
        &mut self,
        field: EditedField,
        value: Option<NaiveDate>,
    ) -> SlicerResult<FilterDirective> {
        let decision = reconcile::apply_edit(
            &mut self.core.model.selection,
            self.core.model.bounds.as_ref(),
            field,
            value,
        );
        trace!(
            field = ?field,
            value = ?value,
            start = ?self.core.model.selection.start,
            end = ?self.core.model.selection.end,
            "user date edit"
        );
        self.resolve_and_forward(decision)
    }

    /// The user's clear action.
    ///
    /// Shows the full dataset span and removes the host filter; the
    /// selection then sits still until reset or a measure change.
    pub fn clear_filter(&mut self) -> SlicerResult<FilterDirective> {
        let decision = reconcile::apply_clear(
            &mut self.core.model.selection,
            self.core.model.bounds.as_ref(),
        );
        debug!("clear filter");
        self.resolve_and_forward(decision)
    }

    /// The user's reset action.
    ///
    /// Re-adopts the default range from the latest snapshot when one is
    /// available; without defaults this collapses to clear.
    pub fn reset_to_defaults(&mut self) -> SlicerResult<FilterDirective> {
        let decision = reconcile::apply_reset(
            &mut self.core.model.selection,
            self.core.model.bounds.as_ref(),
            &self.core.model.latest_defaults,
        );
        debug!(
            defaults_available = self.core.model.latest_defaults.is_available(),
            "reset to defaults"
        );
        self.resolve_and_forward(decision)
    }
}
