//! Dataset date bounds derived from a snapshot's category column.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::date::parse_host_date;

/// Inclusive `[min, max]` span of the parseable dates in a category column.
///
/// Bounds exist only while the snapshot carries at least one parseable
/// date; a column of nulls and sentinels yields no bounds at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl DatasetBounds {
    /// Builds bounds from an explicit span, swapping the ends if reversed.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Folds a category column into bounds, skipping unparseable cells.
    #[must_use]
    pub fn from_values(values: &[Value]) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for value in values {
            let Some(date) = parse_host_date(value) else {
                continue;
            };
            bounds = Some(match bounds {
                None => Self {
                    min: date,
                    max: date,
                },
                Some(current) => Self {
                    min: current.min.min(date),
                    max: current.max.max(date),
                },
            });
        }
        bounds
    }

    /// Earliest date in the dataset.
    #[must_use]
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Latest date in the dataset.
    #[must_use]
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Clamps a date into the inclusive span.
    #[must_use]
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    /// Whether a date already lies inside the span.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}
