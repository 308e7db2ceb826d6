use crate::core::{
    DatasetBounds, DateInputConstraints, FilterTarget, MeasureDefaults, SelectionMode,
    SelectionState,
};
use crate::error::SlicerResult;
use crate::host::FilterSink;
use crate::settings::{SlicerSettings, UiStrings};

use super::validation::validate_settings;
use super::SlicerEngine;

impl<S: FilterSink> SlicerEngine<S> {
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.core.model.selection
    }

    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.core.model.selection.mode
    }

    #[must_use]
    pub fn dataset_bounds(&self) -> Option<DatasetBounds> {
        self.core.model.bounds
    }

    #[must_use]
    pub fn filter_target(&self) -> Option<&FilterTarget> {
        self.core.model.target.as_ref()
    }

    /// Defaults derived from the most recent snapshot.
    #[must_use]
    pub fn measure_defaults(&self) -> MeasureDefaults {
        self.core.model.latest_defaults
    }

    /// Allowed pick ranges for both inputs, derived from the current
    /// bounds and the opposite field of each input.
    #[must_use]
    pub fn input_constraints(&self) -> DateInputConstraints {
        DateInputConstraints::derive(&self.core.model.selection, self.core.model.bounds.as_ref())
    }

    /// Resolved header title: configured text, else the bound field's
    /// display name, else the locale placeholder.
    #[must_use]
    pub fn header_title(&self) -> String {
        self.core.presentation.settings.header_text.resolve_title(
            self.core.model.field_display_name.as_deref(),
            &self.core.presentation.strings,
        )
    }

    #[must_use]
    pub fn settings(&self) -> &SlicerSettings {
        &self.core.presentation.settings
    }

    /// Replaces the formatting model, e.g. when the host pane changes.
    pub fn set_settings(&mut self, settings: SlicerSettings) -> SlicerResult<()> {
        let settings = validate_settings(settings)?;
        self.core.presentation.settings = settings;
        Ok(())
    }

    #[must_use]
    pub fn ui_strings(&self) -> &UiStrings {
        &self.core.presentation.strings
    }

    #[must_use]
    pub fn update_cycles(&self) -> u64 {
        self.core.runtime.update_cycles
    }
}
