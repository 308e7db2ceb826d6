use crate::error::SlicerResult;
use crate::host::FilterSink;
use crate::settings::UiStrings;

use super::validation::validate_config;
use super::{
    engine_core::EngineCore, slicer_model::SlicerModel,
    slicer_presentation::SlicerPresentationState, slicer_runtime::SlicerRuntimeState,
    SlicerEngine, SlicerEngineConfig,
};

impl<S: FilterSink> SlicerEngine<S> {
    /// Creates a fully initialized engine with validated settings.
    ///
    /// The selection starts empty in fallback mode; nothing is pushed to
    /// the sink until the first snapshot or user action produces a
    /// directive.
    pub fn new(sink: S, config: SlicerEngineConfig) -> SlicerResult<Self> {
        let config = validate_config(config)?;
        let strings = UiStrings::for_locale(&config.locale);

        Ok(Self {
            sink,
            core: EngineCore {
                model: SlicerModel::default(),
                presentation: SlicerPresentationState {
                    settings: config.settings,
                    strings,
                },
                runtime: SlicerRuntimeState::default(),
            },
        })
    }
}
