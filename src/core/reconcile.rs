//! The range reconciliation state machine.
//!
//! Every host snapshot and every user action funnels through here. The
//! ingestion chain runs in strict priority order:
//!
//! 1. restored host filter state (mirrors, never re-emits),
//! 2. a changed default range from measure columns (overrides anything,
//!    including a cleared selection),
//! 3. cleared steady state (sits still),
//! 4. fallback fill from dataset bounds (emits only when something moved).
//!
//! Unparseable inputs were already reduced to absent sides upstream, so
//! nothing in this module can fail.

use chrono::NaiveDate;

use crate::core::bounds::DatasetBounds;
use crate::core::selection::{EditedField, MeasureDefaults, SelectionMode, SelectionState};
use crate::core::snapshot::RestoredRange;

/// What a reconciliation step asks the engine to do with the host filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the decision says whether a filter must be pushed or dropped"]
pub enum EmitDecision {
    /// Push the current selection to the host as a filter.
    Push,
    /// Remove the slicer's filter from the host.
    Drop,
    /// Leave the host's filter state untouched.
    Hold,
}

/// One ingestion cycle, run once per host snapshot.
///
/// `bounds`, `defaults` and `restored` are the views freshly derived from
/// that snapshot; `state` is carried across cycles by the engine.
pub fn ingest(
    state: &mut SelectionState,
    bounds: Option<&DatasetBounds>,
    defaults: &MeasureDefaults,
    restored: Option<&RestoredRange>,
) -> EmitDecision {
    // Persisted filter state wins the cycle outright. The host already
    // holds this filter, so mirroring it must not re-emit.
    if let Some(range) = restored {
        state.start = range.start;
        state.end = range.end;
        state.last_edited = None;
        enforce_order(state);
        state.mode = SelectionMode::Restored;
        return EmitDecision::Hold;
    }

    // A changed upstream default overrides any held selection, including a
    // cleared one. Unchanged defaults never re-apply, which is what lets
    // user edits survive ordinary refreshes.
    if defaults.is_available() && *defaults != state.last_applied_defaults {
        adopt_defaults(state, bounds, defaults);
        return EmitDecision::Push;
    }

    // A cleared selection sits still until reset or a measure change.
    if state.mode == SelectionMode::Cleared {
        return EmitDecision::Hold;
    }

    // Fallback fill: complete empty sides from the dataset bounds. Emits
    // only when the cycle actually moved the selection, so an identical
    // snapshot ingested twice emits at most once.
    let before = (state.start, state.end);
    if let Some(bounds) = bounds {
        if state.start.is_none() {
            state.start = Some(bounds.min());
        }
        if state.end.is_none() {
            state.end = Some(bounds.max());
        }
    }
    enforce_order(state);
    if (state.start, state.end) == before {
        EmitDecision::Hold
    } else {
        EmitDecision::Push
    }
}

/// A user edit of one input.
///
/// The value is clamped into the dataset bounds when bounds exist, and the
/// edited side is recorded so a later inversion resolves in its favor. An
/// explicit edit always pushes, even when correction lands the range back
/// where it was. Edits never change the selection mode.
pub fn apply_edit(
    state: &mut SelectionState,
    bounds: Option<&DatasetBounds>,
    field: EditedField,
    value: Option<NaiveDate>,
) -> EmitDecision {
    let value = match (value, bounds) {
        (Some(date), Some(bounds)) => Some(bounds.clamp(date)),
        (value, _) => value,
    };
    state.last_edited = Some(field);
    match field {
        EditedField::Start => state.start = value,
        EditedField::End => state.end = value,
    }
    enforce_order(state);
    EmitDecision::Push
}

/// The user's "clear" action.
///
/// The inputs display the full dataset span, but the host is told to
/// remove the filter entirely rather than apply a full-range predicate.
pub fn apply_clear(state: &mut SelectionState, bounds: Option<&DatasetBounds>) -> EmitDecision {
    state.start = bounds.map(DatasetBounds::min);
    state.end = bounds.map(DatasetBounds::max);
    state.last_edited = None;
    state.mode = SelectionMode::Cleared;
    EmitDecision::Drop
}

/// The user's "reset" action.
///
/// Repaints the full dataset span, then overlays the default range if one
/// is available. Without defaults, reset collapses to clear.
pub fn apply_reset(
    state: &mut SelectionState,
    bounds: Option<&DatasetBounds>,
    defaults: &MeasureDefaults,
) -> EmitDecision {
    state.start = bounds.map(DatasetBounds::min);
    state.end = bounds.map(DatasetBounds::max);
    state.last_edited = None;
    if defaults.is_available() {
        adopt_defaults(state, bounds, defaults);
        EmitDecision::Push
    } else {
        state.mode = SelectionMode::Cleared;
        EmitDecision::Drop
    }
}

/// Reasserts `start <= end` whenever both sides are present.
///
/// The most recently edited side wins and drags the other along; with no
/// edit on record (programmatic restore or adoption) the sides swap.
pub fn enforce_order(state: &mut SelectionState) {
    let Some((start, end)) = state.range() else {
        return;
    };
    if start <= end {
        return;
    }
    match state.last_edited {
        Some(EditedField::Start) => state.end = Some(start),
        Some(EditedField::End) => state.start = Some(end),
        None => {
            state.start = Some(end);
            state.end = Some(start);
        }
    }
}

fn adopt_defaults(
    state: &mut SelectionState,
    bounds: Option<&DatasetBounds>,
    defaults: &MeasureDefaults,
) {
    // Per-side adoption: a present default overwrites its side, an absent
    // one leaves the side as it stands. A side that is still empty after
    // adoption completes from the bounds, so the pushed range is already
    // stable and the next identical snapshot has nothing left to fill.
    if let Some(start) = defaults.start {
        state.start = Some(start);
    }
    if let Some(end) = defaults.end {
        state.end = Some(end);
    }
    if let Some(bounds) = bounds {
        if state.start.is_none() {
            state.start = Some(bounds.min());
        }
        if state.end.is_none() {
            state.end = Some(bounds.max());
        }
    }
    state.last_applied_defaults = *defaults;
    state.last_edited = None;
    enforce_order(state);
    state.mode = SelectionMode::TrackingDefaults;
}
