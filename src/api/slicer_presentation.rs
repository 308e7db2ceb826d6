use crate::settings::{SlicerSettings, UiStrings};

/// Presentation-facing engine state: validated settings plus the label set
/// resolved from the host locale at construction.
#[derive(Debug, Default)]
pub struct SlicerPresentationState {
    pub(super) settings: SlicerSettings,
    pub(super) strings: UiStrings,
}
