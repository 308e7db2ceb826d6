use super::{
    slicer_model::SlicerModel, slicer_presentation::SlicerPresentationState,
    slicer_runtime::SlicerRuntimeState,
};

/// Internal engine core state used by the public facade (`SlicerEngine`).
pub(super) struct EngineCore {
    pub(super) model: SlicerModel,
    pub(super) presentation: SlicerPresentationState,
    pub(super) runtime: SlicerRuntimeState,
}
