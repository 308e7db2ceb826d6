//! Inbound host data snapshots and the views derived from them.
//!
//! A snapshot is the host's complete statement of the moment: the bound
//! category column, any measure columns, and any filter state the host
//! persisted for this visual. Everything the reconciler consumes is derived
//! from here; nothing is ever partially updated across snapshots.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::bounds::DatasetBounds;
use crate::core::date::parse_host_date;
use crate::core::filter::FilterTarget;
use crate::core::selection::MeasureDefaults;
use crate::error::{SlicerError, SlicerResult};

/// One host data refresh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    /// The categorical date column the slicer is bound to, if any.
    #[serde(default)]
    pub category: Option<CategoryColumn>,
    /// Measure columns in host order; the first two act as default start
    /// and default end.
    #[serde(default)]
    pub measures: Vec<MeasureColumn>,
    /// Filter descriptors the host persisted from an earlier session.
    #[serde(default)]
    pub restored_filters: Vec<RestoredFilter>,
}

/// The bound categorical column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryColumn {
    pub display_name: String,
    /// Qualified `table.column` name as the host reports it.
    pub query_name: String,
    #[serde(default)]
    pub values: Vec<Value>,
}

/// One measure column; only its first value participates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasureColumn {
    #[serde(default)]
    pub values: Vec<Value>,
}

/// A persisted filter as the host hands it back: untyped conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoredFilter {
    #[serde(default)]
    pub conditions: Vec<RestoredCondition>,
}

/// One persisted comparison, operator still in wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoredCondition {
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

/// A persisted range recovered from restored filter conditions.
///
/// Sides whose operands failed to parse stay unset; restoring such a range
/// still replaces the selection wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoredRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DataSnapshot {
    pub fn from_json_str(json: &str) -> SlicerResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SlicerError::InvalidData(format!("failed to parse snapshot: {e}")))
    }

    /// Dataset bounds folded from the category column's parseable dates.
    #[must_use]
    pub fn dataset_bounds(&self) -> Option<DatasetBounds> {
        self.category
            .as_ref()
            .and_then(|category| DatasetBounds::from_values(&category.values))
    }

    /// The filter target named by the bound category, if one is bound.
    #[must_use]
    pub fn filter_target(&self) -> Option<FilterTarget> {
        self.category
            .as_ref()
            .map(|category| FilterTarget::from_field(&category.query_name, &category.display_name))
    }

    /// Display name of the bound category, for the header fallback chain.
    #[must_use]
    pub fn category_display_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|category| category.display_name.as_str())
    }

    /// Default range read positionally from the first two measure columns.
    ///
    /// Boolean sentinels and unparseable values leave a side absent.
    #[must_use]
    pub fn measure_defaults(&self) -> MeasureDefaults {
        let side = |index: usize| -> Option<NaiveDate> {
            self.measures
                .get(index)
                .and_then(|measure| measure.values.first())
                .and_then(parse_host_date)
        };
        MeasureDefaults::new(side(0), side(1))
    }

    /// The persisted range to restore, if any descriptor carries a
    /// recognized comparison operator.
    ///
    /// The first such descriptor wins; within it, a later condition on the
    /// same side overrides an earlier one.
    #[must_use]
    pub fn restored_range(&self) -> Option<RestoredRange> {
        self.restored_filters.iter().find_map(|filter| {
            let mut recognized = false;
            let mut start = None;
            let mut end = None;
            for condition in &filter.conditions {
                match condition.operator.as_str() {
                    "GreaterThanOrEqual" => {
                        recognized = true;
                        start = parse_host_date(&condition.value);
                    }
                    "LessThanOrEqual" => {
                        recognized = true;
                        end = parse_host_date(&condition.value);
                    }
                    _ => {}
                }
            }
            recognized.then_some(RestoredRange { start, end })
        })
    }
}
