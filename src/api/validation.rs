use crate::error::SlicerResult;
use crate::settings::SlicerSettings;

use super::SlicerEngineConfig;

pub(super) fn validate_config(config: SlicerEngineConfig) -> SlicerResult<SlicerEngineConfig> {
    validate_settings(config.settings).map(|settings| SlicerEngineConfig {
        locale: config.locale,
        settings,
    })
}

pub(super) fn validate_settings(settings: SlicerSettings) -> SlicerResult<SlicerSettings> {
    settings.validate()?;
    Ok(settings)
}
