//! Selection state for the two linked date inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::bounds::DatasetBounds;

/// Which input the user touched last.
///
/// Drives the auto-correction tie-break when a selection inverts: the most
/// recently edited side wins and drags the other along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditedField {
    Start,
    End,
}

/// Lifecycle mode of the selection.
///
/// A closed set instead of independent boolean flags, so the "cleared"
/// condition cannot be half-set. `Cleared` suppresses fallback fill and
/// filter emission until a reset or an upstream default change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// No stronger source has spoken; empty sides fill from dataset bounds.
    #[default]
    Fallback,
    /// The selection mirrors a filter range persisted by the host.
    Restored,
    /// The selection follows the default range supplied by measure columns.
    TrackingDefaults,
    /// The user cleared the filter; the range merely displays the bounds.
    Cleared,
}

/// Default range supplied positionally by the first two measure columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasureDefaults {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl MeasureDefaults {
    #[must_use]
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Defaults participate in reconciliation only when at least one side
    /// resolved to a date.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// The selection owned by one engine instance.
///
/// `last_applied_defaults` remembers the measure range most recently adopted
/// so that an unchanged upstream default does not clobber user edits on the
/// next snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub mode: SelectionMode,
    pub last_edited: Option<EditedField>,
    pub last_applied_defaults: MeasureDefaults,
}

impl SelectionState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Both sides, when both are set.
    #[must_use]
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Allowed pick ranges for each input, derived per cycle.
///
/// Each input spans the dataset bounds, tightened on the inside by the
/// opposite field's current value: a chosen end date caps the start picker
/// and a chosen start date floors the end picker. Derived, never stored;
/// constraining an input never forces its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInputConstraints {
    pub start_min: Option<NaiveDate>,
    pub start_max: Option<NaiveDate>,
    pub end_min: Option<NaiveDate>,
    pub end_max: Option<NaiveDate>,
}

impl DateInputConstraints {
    #[must_use]
    pub fn derive(selection: &SelectionState, bounds: Option<&DatasetBounds>) -> Self {
        let min = bounds.map(DatasetBounds::min);
        let max = bounds.map(DatasetBounds::max);
        Self {
            start_min: min,
            start_max: selection.end.or(max),
            end_min: selection.start.or(min),
            end_max: max,
        }
    }
}
