//! The outbound filter contract spoken to the host.
//!
//! A selection maps to an "advanced filter": an `And` of up to two date
//! comparisons over one target column. Operands travel as local-midnight
//! datetimes so the host filters by wall calendar date.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::date::local_midnight_iso;
use crate::core::selection::SelectionState;
use crate::error::{SlicerError, SlicerResult};

/// The column a filter applies to, in host naming.
///
/// The table is the segment of the qualified query name before the first
/// dot; a dotless query name yields an empty table, mirroring host behavior
/// for unqualified fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTarget {
    pub table: String,
    pub column: String,
}

impl FilterTarget {
    #[must_use]
    pub fn from_field(query_name: &str, display_name: &str) -> Self {
        let table = match query_name.find('.') {
            Some(dot) => &query_name[..dot],
            None => "",
        };
        Self {
            table: table.to_owned(),
            column: display_name.to_owned(),
        }
    }
}

/// Comparison operators the slicer emits and recognizes on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    GreaterThanOrEqual,
    LessThanOrEqual,
}

/// How the host combines a filter's conditions. Always `And` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[default]
    And,
}

/// One comparison against the target column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub operator: ComparisonOperator,
    pub value: String,
}

/// The composite range predicate in host wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedFilter {
    pub target: FilterTarget,
    pub logical_operator: LogicalOperator,
    pub conditions: SmallVec<[FilterCondition; 2]>,
}

impl AdvancedFilter {
    /// Builds the predicate for the present sides of a selection.
    ///
    /// A single-sided selection produces a single-condition filter; an empty
    /// selection produces no filter at all.
    #[must_use]
    pub fn from_selection(target: &FilterTarget, selection: &SelectionState) -> Option<Self> {
        let mut conditions: SmallVec<[FilterCondition; 2]> = SmallVec::new();
        if let Some(start) = selection.start {
            conditions.push(FilterCondition {
                operator: ComparisonOperator::GreaterThanOrEqual,
                value: local_midnight_iso(start),
            });
        }
        if let Some(end) = selection.end {
            conditions.push(FilterCondition {
                operator: ComparisonOperator::LessThanOrEqual,
                value: local_midnight_iso(end),
            });
        }
        if conditions.is_empty() {
            return None;
        }
        Some(Self {
            target: target.clone(),
            logical_operator: LogicalOperator::And,
            conditions,
        })
    }

    /// Serializes the filter for the host sink.
    pub fn to_json(&self) -> SlicerResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SlicerError::InvalidData(format!("filter serialization failed: {e}")))
    }
}

/// What the engine asks the host to do after a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterDirective {
    /// Push this predicate to the host.
    Apply(AdvancedFilter),
    /// Remove any filter owned by the slicer.
    Remove,
    /// Leave the host's filter state untouched.
    Keep,
}

impl FilterDirective {
    #[must_use]
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::{AdvancedFilter, FilterTarget};
    use crate::core::selection::SelectionState;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn target_table_is_prefix_before_first_dot() {
        let target = FilterTarget::from_field("Sales.OrderDate", "Order Date");
        assert_eq!(target.table, "Sales");
        assert_eq!(target.column, "Order Date");
    }

    #[test]
    fn dotless_query_name_yields_empty_table() {
        let target = FilterTarget::from_field("OrderDate", "Order Date");
        assert_eq!(target.table, "");
    }

    #[test]
    fn both_sides_serialize_to_the_host_wire_shape() {
        let target = FilterTarget::from_field("Sales.OrderDate", "Order Date");
        let selection = SelectionState {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 3, 31)),
            ..SelectionState::default()
        };
        let filter =
            AdvancedFilter::from_selection(&target, &selection).expect("two-sided filter");
        let wire = serde_json::to_value(&filter).expect("serializable filter");
        assert_eq!(
            wire,
            json!({
                "target": { "table": "Sales", "column": "Order Date" },
                "logicalOperator": "And",
                "conditions": [
                    { "operator": "GreaterThanOrEqual", "value": "2024-01-01T00:00:00" },
                    { "operator": "LessThanOrEqual", "value": "2024-03-31T00:00:00" },
                ],
            })
        );
    }

    #[test]
    fn single_sided_selection_emits_one_condition() {
        let target = FilterTarget::from_field("Sales.OrderDate", "Order Date");
        let selection = SelectionState {
            end: Some(date(2024, 3, 31)),
            ..SelectionState::default()
        };
        let filter =
            AdvancedFilter::from_selection(&target, &selection).expect("one-sided filter");
        assert_eq!(filter.conditions.len(), 1);
        assert_eq!(filter.conditions[0].value, "2024-03-31T00:00:00");
    }

    #[test]
    fn empty_selection_produces_no_filter() {
        let target = FilterTarget::from_field("Sales.OrderDate", "Order Date");
        assert_eq!(
            AdvancedFilter::from_selection(&target, &SelectionState::default()),
            None
        );
    }
}
